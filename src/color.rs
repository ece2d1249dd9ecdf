use std::fmt;

/// Escape sequence that restores the default foreground and background.
pub const RESET: &str = "\x1b[39;49m";

/// One of the basic ANSI terminal colors a bar can be drawn in.
///
/// Every color is emitted as `ESC[<code>;49m`, so the background always stays at the terminal
/// default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's own foreground color (SGR 39).
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Looks up a color by its lowercase name.
    ///
    /// Unknown names are not an error: they fall back to [`Color::Default`].
    ///
    /// ```
    /// use linebar::Color;
    ///
    /// assert_eq!(Color::from_name("cyan"), Color::Cyan);
    /// assert_eq!(Color::from_name("purple"), Color::Default);
    /// ```
    pub fn from_name(name: &str) -> Color {
        match name {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            _ => Color::Default,
        }
    }

    #[inline(always)]
    fn ansi_num(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Default => 39,
        }
    }

    /// Returns the escape sequence that switches the terminal to this color.
    pub fn escape(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{};49m", self.ansi_num())
    }
}

/// Resolves a color name straight to its escape sequence.
pub fn resolve(name: &str) -> String {
    Color::from_name(name).escape()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_codes() {
        assert_eq!(Color::Black.escape(), "\x1b[30;49m");
        assert_eq!(Color::Red.escape(), "\x1b[31;49m");
        assert_eq!(Color::Green.escape(), "\x1b[32;49m");
        assert_eq!(Color::Yellow.escape(), "\x1b[33;49m");
        assert_eq!(Color::Blue.escape(), "\x1b[34;49m");
        assert_eq!(Color::Magenta.escape(), "\x1b[35;49m");
        assert_eq!(Color::Cyan.escape(), "\x1b[36;49m");
        assert_eq!(Color::White.escape(), "\x1b[37;49m");
        assert_eq!(Color::Default.escape(), RESET);
    }

    #[test]
    fn known_names() {
        for (name, color) in [
            ("default", Color::Default),
            ("red", Color::Red),
            ("blue", Color::Blue),
            ("green", Color::Green),
            ("yellow", Color::Yellow),
            ("black", Color::Black),
            ("white", Color::White),
            ("magenta", Color::Magenta),
            ("cyan", Color::Cyan),
        ] {
            assert_eq!(Color::from_name(name), color, "{name}");
        }
    }

    #[test]
    fn unknown_name_is_default() {
        assert_eq!(resolve("purple"), resolve("default"));
        assert_eq!(resolve(""), RESET);
        // lookup is case sensitive
        assert_eq!(Color::from_name("Red"), Color::Default);
    }
}
