use std::fmt;
use std::io;

/// Errors returned by progress bar operations
#[derive(Debug)]
#[non_exhaustive]
pub enum BarError {
    /// The message does not fit in the margin next to the bar.
    ///
    /// `width` is the message's display width; it has to be strictly less than `margin`.
    MessageTooLong { width: usize, margin: usize },
    /// Writing to the draw target failed.
    Io(io::Error),
}

impl fmt::Display for BarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarError::MessageTooLong { width, margin } => write!(
                f,
                "message does not fit in margin ({width} columns, {margin} available)"
            ),
            BarError::Io(err) => write!(f, "failed to draw progress bar: {err}"),
        }
    }
}

impl std::error::Error for BarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BarError::Io(err) => Some(err),
            BarError::MessageTooLong { .. } => None,
        }
    }
}

impl From<io::Error> for BarError {
    fn from(err: io::Error) -> Self {
        BarError::Io(err)
    }
}
