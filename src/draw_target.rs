use std::io;

use console::Term;

use crate::TermLike;

/// Target for draw operations
///
/// This tells a progress bar where to paint to and how wide the area it may paint is. Every
/// draw writes one complete line and flushes it, so the bar is visible as soon as
/// [`ProgressBar::update`] returns.
///
/// [`ProgressBar::update`]: crate::ProgressBar::update
#[derive(Debug)]
pub struct ProgressDrawTarget {
    kind: TargetKind,
}

impl ProgressDrawTarget {
    /// Draw to a buffered stdout terminal.
    ///
    /// This is the default draw target for progress bars.
    pub fn stdout() -> Self {
        Self::term(Term::buffered_stdout())
    }

    /// Draw to a terminal.
    ///
    /// The terminal is always drawn to, even when it is not user attended, and its width is
    /// queried again on every draw.
    pub fn term(term: Term) -> Self {
        Self {
            kind: TargetKind::Term { term },
        }
    }

    /// Draw to a boxed object that implements the [`TermLike`] trait.
    pub fn term_like(term_like: Box<dyn TermLike>) -> Self {
        Self {
            kind: TargetKind::TermLike { inner: term_like },
        }
    }

    /// Returns the current width of the draw target.
    pub(crate) fn width(&self) -> u16 {
        match self.kind {
            TargetKind::Term { ref term } => term.size().1,
            TargetKind::TermLike { ref inner } => inner.width(),
        }
    }

    /// Writes `line` as-is (it carries its own `\r` or `\n`) and flushes.
    pub(crate) fn draw(&self, line: &str) -> io::Result<()> {
        match self.kind {
            TargetKind::Term { ref term } => {
                term.write_str(line)?;
                term.flush()
            }
            TargetKind::TermLike { ref inner } => {
                inner.write_str(line)?;
                inner.flush()
            }
        }
    }
}

impl Default for ProgressDrawTarget {
    fn default() -> Self {
        Self::stdout()
    }
}

#[derive(Debug)]
enum TargetKind {
    Term { term: Term },
    TermLike { inner: Box<dyn TermLike> },
}
