use std::borrow::Cow;
use std::io;

use console::measure_text_width;
use log::debug;

use crate::color::{Color, RESET};
use crate::draw_target::ProgressDrawTarget;
use crate::error::BarError;
use crate::style::{Appearance, AppearanceUpdate, Percent};

/// Which edge of the terminal the bar hugs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Bar first, message trailing against the right edge.
    Left,
    /// Message first, bar against the right edge.
    #[default]
    Right,
}

impl Alignment {
    /// `"right"` selects [`Alignment::Right`]; every other name selects [`Alignment::Left`].
    pub fn from_name(name: &str) -> Alignment {
        match name {
            "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }
}

/// A single-line progress bar that redraws itself in place
///
/// Every [`update`] renders one full terminal line, e.g.
///
/// ```text
/// Updating...               [#############################-]  95.5%
/// ```
///
/// and ends it with a carriage return so the next update overwrites it. The update that reaches
/// the total ends the line with a newline instead, leaving the finished bar on screen.
///
/// The line is laid out against the width of the draw target at the time of the update: the
/// message gets whatever columns the brackets, bar body and percent field leave over (the
/// *margin*), padded with spaces so the line fills the terminal exactly.
///
/// [`update`]: ProgressBar::update
#[derive(Debug)]
pub struct ProgressBar {
    appearance: Appearance,
    alignment: Alignment,
    margin: usize,
    message: Cow<'static, str>,
    draw_target: ProgressDrawTarget,
}

impl Default for ProgressBar {
    /// A 40 symbol bar drawing to stdout.
    fn default() -> Self {
        ProgressBar::new(40)
    }
}

impl ProgressBar {
    /// Creates a new progress bar whose body is `length` symbols long
    ///
    /// This progress bar draws directly to stdout.
    pub fn new(length: usize) -> ProgressBar {
        ProgressBar::with_draw_target(length, ProgressDrawTarget::stdout())
    }

    /// Creates a new progress bar with a given length and draw target
    pub fn with_draw_target(length: usize, draw_target: ProgressDrawTarget) -> ProgressBar {
        let mut bar = ProgressBar {
            appearance: Appearance::new(length),
            alignment: Alignment::Right,
            margin: 0,
            message: Cow::Borrowed(""),
            draw_target,
        };
        bar.set_alignment(Alignment::Right);
        bar
    }

    /// A convenience builder-like function for a progress bar with a given appearance
    pub fn with_appearance(mut self, appearance: Appearance) -> ProgressBar {
        self.appearance = appearance;
        self.recompute_margin();
        self
    }

    /// A convenience builder-like function for a progress bar with a given alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> ProgressBar {
        self.set_alignment(alignment);
        self
    }

    /// A convenience builder-like function for a progress bar with a given color
    pub fn with_color(mut self, color: Color) -> ProgressBar {
        self.set_color(color);
        self
    }

    /// Draws the bar at `value` out of `total`
    ///
    /// The line is written and flushed before this returns. When `value == total` the line is
    /// terminated with a newline, so anything written afterwards starts on a fresh line.
    ///
    /// # Panics
    ///
    /// Panics if `value > total`.
    pub fn update(&self, value: u64, total: u64) -> io::Result<()> {
        let line = self.render(value, total);
        self.draw_target.draw(&line)
    }

    /// Draws the bar at `value` percent, i.e. `update(value, 100)`.
    pub fn update_percent(&self, value: u64) -> io::Result<()> {
        self.update(value, 100)
    }

    /// Returns exactly what [`update`](ProgressBar::update) would write for `value` out of
    /// `total`, color sequences and line terminator included.
    ///
    /// # Panics
    ///
    /// Panics if `value > total`.
    pub fn render(&self, value: u64, total: u64) -> String {
        assert!(
            value <= total,
            "value is {value} but should not surpass the total, {total}"
        );

        let bar = format!(
            "{}{}{}{}",
            self.appearance.left,
            self.appearance.format_body(value, total),
            self.appearance.right,
            Percent::of(value, total),
        );
        // a terminal narrower than the bar leaves no room; pad with nothing rather than fail
        let pad = " ".repeat(
            self.current_margin()
                .saturating_sub(measure_text_width(&self.message)),
        );
        let line = match self.alignment {
            Alignment::Right => format!("{}{}{}", self.message, pad, bar),
            Alignment::Left => format!("{}{}{}", bar, pad, self.message),
        };
        let end = if value == total { '\n' } else { '\r' };

        format!("{}{}{}{}", self.appearance.color, line, RESET, end)
    }

    /// Sets the message shown next to the bar
    ///
    /// The message must be narrower than the margin left over by the bar on the current
    /// terminal. It is not checked again if the terminal is resized or the bar is reshaped
    /// later.
    pub fn set_message(&mut self, msg: impl Into<Cow<'static, str>>) -> Result<(), BarError> {
        let msg = msg.into();
        let margin = self.current_margin();
        let width = measure_text_width(&msg);
        if width >= margin {
            debug!("rejecting message of {width} columns, margin is {margin}");
            return Err(BarError::MessageTooLong { width, margin });
        }
        self.message = msg;
        Ok(())
    }

    /// Sets which edge of the terminal the bar hugs and recomputes the margin
    ///
    /// A message that was already set is kept as is.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
        self.recompute_margin();
    }

    /// Sets the symbol for the completed part of the bar
    pub fn set_fill(&mut self, s: impl Into<Cow<'static, str>>) {
        self.appearance.fill = s.into();
    }

    /// Sets the symbol for the part of the bar still to do
    pub fn set_empty(&mut self, s: impl Into<Cow<'static, str>>) {
        self.appearance.empty = s.into();
    }

    /// Sets the string that closes the bar on the left and recomputes the margin
    pub fn set_left(&mut self, s: impl Into<Cow<'static, str>>) {
        self.appearance.left = s.into();
        self.recompute_margin();
    }

    /// Sets the string that closes the bar on the right and recomputes the margin
    pub fn set_right(&mut self, s: impl Into<Cow<'static, str>>) {
        self.appearance.right = s.into();
        self.recompute_margin();
    }

    pub fn set_color(&mut self, color: Color) {
        self.appearance.color = color;
    }

    /// Sets the color by name. Unknown names fall back to the terminal's default color.
    pub fn set_color_name(&mut self, name: &str) {
        self.set_color(Color::from_name(name));
    }

    /// Sets the length of the bar body and recomputes the margin
    pub fn set_length(&mut self, length: usize) {
        self.appearance.length = length;
        self.set_alignment(self.alignment);
    }

    /// Applies every field present in `update`, in the order fill, empty, left, right, color,
    /// length.
    pub fn set_appearance(&mut self, update: AppearanceUpdate) {
        let AppearanceUpdate {
            fill,
            empty,
            left,
            right,
            color,
            length,
        } = update;

        if let Some(fill) = fill {
            self.set_fill(fill);
        }
        if let Some(empty) = empty {
            self.set_empty(empty);
        }
        if let Some(left) = left {
            self.set_left(left);
        }
        if let Some(right) = right {
            self.set_right(right);
        }
        if let Some(color) = color {
            self.set_color(color);
        }
        if let Some(length) = length {
            self.set_length(length);
        }
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Returns the margin as computed by the last alignment, length or bracket change.
    pub fn margin(&self) -> usize {
        self.margin
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn recompute_margin(&mut self) {
        self.margin = self.current_margin();
        debug!(
            "progress bar margin is {} columns ({:?} aligned)",
            self.margin, self.alignment
        );
    }

    /// Columns left for the message on the draw target as it is right now.
    fn current_margin(&self) -> usize {
        usize::from(self.draw_target.width()).saturating_sub(self.appearance.bar_width())
    }
}
