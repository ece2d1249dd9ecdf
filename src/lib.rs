//! linebar is a single-line progress bar for command line tools.
//!
//! A bar occupies exactly one terminal line and redraws itself in place on every
//! [`ProgressBar::update`]: the line is ended with a carriage return so the next update
//! overwrites it, and with a newline once the bar is full. Next to the bar sits an optional
//! message, either before it (the bar hugs the right edge of the terminal) or after it.
//!
//! ```text
//! Updating...               [#############################-]  95.5%
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use linebar::{Alignment, ProgressBar};
//!
//! let mut bar = ProgressBar::new(30);
//! bar.set_color_name("cyan");
//! bar.set_alignment(Alignment::Right);
//! bar.set_message("Updating...").unwrap();
//! for i in 0..=200 {
//!     bar.update(i, 200).unwrap();
//!     // ..
//! }
//! ```
//!
//! There is no background thread: the bar is drawn when, and only when, `update` is called.
//! [`TimedRun`] shows the usual loop, driving a bar over a fixed duration.
//!
//! # Appearance
//!
//! The fill and empty symbols, the brackets, the color and the bar length can be changed one at
//! a time or together with [`AppearanceUpdate`]:
//!
//! ```rust,no_run
//! # use linebar::{AppearanceUpdate, Color, ProgressBar};
//! let mut bar = ProgressBar::new(40);
//! bar.set_appearance(
//!     AppearanceUpdate::new()
//!         .fill("=")
//!         .empty(" ")
//!         .left("|")
//!         .right("|")
//!         .color(Color::Green),
//! );
//! ```
//!
//! Colors are the basic ANSI foreground colors; unknown color names fall back to the terminal
//! default instead of failing.
//!
//! # Layout
//!
//! The width of the terminal is queried on every update. Whatever the brackets, the bar body
//! and the seven column percent field leave over is the margin for the message, and the line is
//! padded to fill the terminal exactly. Messages are checked against the margin when they are
//! set; a terminal that is narrower than the bar itself gets no padding at all.
//!
//! Tests and other non-terminal outputs can supply their own width and sink through
//! [`TermLike`] and [`ProgressDrawTarget::term_like`].

mod color;
mod draw_target;
mod error;
#[cfg(any(test, feature = "in_memory"))]
mod in_memory;
mod log;
mod progress_bar;
mod style;
mod term_like;
mod timed;

pub use crate::color::{resolve, Color, RESET};
pub use crate::draw_target::ProgressDrawTarget;
pub use crate::error::BarError;
#[cfg(any(test, feature = "in_memory"))]
pub use crate::in_memory::InMemoryTerm;
pub use crate::log::LogWrapper;
pub use crate::progress_bar::{Alignment, ProgressBar};
pub use crate::style::{Appearance, AppearanceUpdate};
pub use crate::term_like::TermLike;
pub use crate::timed::TimedRun;
