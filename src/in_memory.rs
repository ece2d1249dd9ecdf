use std::fmt::{Debug, Formatter};
use std::io::Write;
use std::sync::{Arc, Mutex};

use vt100::Parser;

use crate::TermLike;

/// A thin wrapper around [`vt100::Parser`].
///
/// This is just an [`Arc`] around its internal state, so it can be freely cloned: hand one clone
/// to a progress bar and keep the other to inspect what ended up on the screen.
#[derive(Debug, Clone)]
pub struct InMemoryTerm {
    state: Arc<Mutex<InMemoryTermState>>,
}

impl InMemoryTerm {
    pub fn new(rows: u16, cols: u16) -> InMemoryTerm {
        assert!(rows > 0, "rows must be > 0");
        assert!(cols > 0, "cols must be > 0");
        InMemoryTerm {
            state: Arc::new(Mutex::new(InMemoryTermState::new(rows, cols))),
        }
    }

    /// Returns the visible screen contents, one line per row, with empty rows at the bottom
    /// trimmed off.
    pub fn contents(&self) -> String {
        let state = self.state.lock().unwrap();

        // `Screen::contents` drops the row structure, so rebuild it row by row.
        let mut rows = state
            .parser
            .screen()
            .rows(0, state.width)
            .collect::<Vec<_>>();

        while rows.last().map_or(false, |line| line.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    /// Returns the cursor position as `(row, col)`.
    pub fn cursor_position(&self) -> (u16, u16) {
        self.state.lock().unwrap().parser.screen().cursor_position()
    }
}

impl TermLike for InMemoryTerm {
    fn width(&self) -> u16 {
        self.state.lock().unwrap().width
    }

    fn write_str(&self, s: &str) -> std::io::Result<()> {
        self.state.lock().unwrap().write_str(s)
    }

    fn clear_line(&self) -> std::io::Result<()> {
        self.state.lock().unwrap().write_str("\r\x1b[2K")
    }

    fn flush(&self) -> std::io::Result<()> {
        self.state.lock().unwrap().parser.flush()
    }
}

struct InMemoryTermState {
    width: u16,
    parser: vt100::Parser,
}

impl InMemoryTermState {
    pub(crate) fn new(rows: u16, cols: u16) -> InMemoryTermState {
        InMemoryTermState {
            width: cols,
            parser: Parser::new(rows, cols, 0),
        }
    }

    /// Like a tty doing output processing, a bare `\n` also returns the cursor to column 0.
    pub(crate) fn write_str(&mut self, s: &str) -> std::io::Result<()> {
        self.parser.write_all(s.replace('\n', "\r\n").as_bytes())
    }
}

impl Debug for InMemoryTermState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTermState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Alignment, ProgressBar, ProgressDrawTarget};

    fn bar(in_mem: &InMemoryTerm, length: usize) -> ProgressBar {
        ProgressBar::with_draw_target(
            length,
            ProgressDrawTarget::term_like(Box::new(in_mem.clone())),
        )
    }

    #[test]
    fn line_wrapping() {
        let in_mem = InMemoryTerm::new(10, 5);
        assert_eq!(in_mem.cursor_position(), (0, 0));

        in_mem.write_str("ABCDE").unwrap();
        assert_eq!(in_mem.contents(), "ABCDE");
        assert_eq!(in_mem.cursor_position(), (0, 5));

        // Should wrap onto next line
        in_mem.write_str("FG").unwrap();
        assert_eq!(in_mem.contents(), "ABCDE\nFG");
        assert_eq!(in_mem.cursor_position(), (1, 2));
    }

    #[test]
    fn carriage_return_redraws_in_place() {
        let in_mem = InMemoryTerm::new(10, 20);
        in_mem.write_str("first line\r").unwrap();
        in_mem.write_str("second\r").unwrap();
        assert_eq!(in_mem.contents(), "secondline");
        assert_eq!(in_mem.cursor_position(), (0, 0));

        in_mem.clear_line().unwrap();
        assert_eq!(in_mem.contents(), "");
    }

    #[test]
    fn basic_progress_bar() {
        let in_mem = InMemoryTerm::new(10, 40);
        let pb = bar(&in_mem, 10);

        assert_eq!(in_mem.contents(), String::new());

        pb.update(5, 10).unwrap();
        assert!(in_mem.contents().ends_with("[#####-----]  50.0%"));
        assert_eq!(in_mem.cursor_position(), (0, 0));

        pb.update(7, 10).unwrap();
        assert!(in_mem.contents().ends_with("[#######---]  70.0%"));
        assert_eq!(in_mem.contents().lines().count(), 1);

        pb.update(10, 10).unwrap();
        assert!(in_mem.contents().ends_with("[##########] 100.0%"));
        assert_eq!(in_mem.cursor_position().0, 1);
    }

    #[test]
    fn message_placement() {
        let in_mem = InMemoryTerm::new(10, 40);
        let mut pb = bar(&in_mem, 10);
        pb.set_message("copying").unwrap();

        pb.update(1, 4).unwrap();
        let line = in_mem.contents();
        assert!(line.starts_with("copying "));
        assert!(line.ends_with("[###-------]  25.0%"));

        pb.set_alignment(Alignment::Left);
        pb.update(2, 4).unwrap();
        let line = in_mem.contents();
        assert!(line.starts_with("[#####-----]  50.0% "));
        assert!(line.ends_with("copying"));
    }
}
