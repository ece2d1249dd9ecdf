use std::borrow::Cow;
use std::fmt;

use crate::color::Color;

/// Columns taken by the percent field: padding plus `NN.N%`, always seven wide.
pub(crate) const PERCENT_WIDTH: usize = 7;

/// Controls how a progress bar looks.
///
/// The symbols are meant to be single printable characters. Longer strings are accepted, but
/// the bar body is `length` symbols long, so multi-column symbols will push the line past the
/// terminal edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub(crate) fill: Cow<'static, str>,
    pub(crate) empty: Cow<'static, str>,
    pub(crate) left: Cow<'static, str>,
    pub(crate) right: Cow<'static, str>,
    pub(crate) color: Color,
    pub(crate) length: usize,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(40)
    }
}

impl Appearance {
    /// Returns the default look (`[###---]` in the terminal's own color) for a bar body of
    /// `length` symbols.
    pub fn new(length: usize) -> Appearance {
        Appearance {
            fill: Cow::Borrowed("#"),
            empty: Cow::Borrowed("-"),
            left: Cow::Borrowed("["),
            right: Cow::Borrowed("]"),
            color: Color::Default,
            length,
        }
    }

    /// Sets the symbol for the completed part of the bar.
    pub fn with_fill(mut self, s: impl Into<Cow<'static, str>>) -> Appearance {
        self.fill = s.into();
        self
    }

    /// Sets the symbol for the part of the bar still to do.
    pub fn with_empty(mut self, s: impl Into<Cow<'static, str>>) -> Appearance {
        self.empty = s.into();
        self
    }

    /// Sets the string that closes the bar on the left.
    pub fn with_left(mut self, s: impl Into<Cow<'static, str>>) -> Appearance {
        self.left = s.into();
        self
    }

    /// Sets the string that closes the bar on the right.
    pub fn with_right(mut self, s: impl Into<Cow<'static, str>>) -> Appearance {
        self.right = s.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Appearance {
        self.color = color;
        self
    }

    pub fn with_length(mut self, length: usize) -> Appearance {
        self.length = length;
        self
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn empty(&self) -> &str {
        &self.empty
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of symbols in the bar body.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Columns the bar occupies without any message: brackets, body and percent field.
    pub(crate) fn bar_width(&self) -> usize {
        self.length
            + console::measure_text_width(&self.left)
            + console::measure_text_width(&self.right)
            + PERCENT_WIDTH
    }

    /// Builds the bar body: `fill_count` fill symbols followed by empty symbols up to `length`.
    pub(crate) fn format_body(&self, value: u64, total: u64) -> String {
        let filled = fill_count(self.length, value, total);
        let mut body = String::with_capacity(self.length * self.fill.len().max(self.empty.len()));
        body.push_str(&self.fill.repeat(filled));
        body.push_str(&self.empty.repeat(self.length - filled));
        body
    }
}

/// A batch of appearance changes for [`ProgressBar::set_appearance`].
///
/// Fields left as `None` keep their current value.
///
/// [`ProgressBar::set_appearance`]: crate::ProgressBar::set_appearance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppearanceUpdate {
    pub fill: Option<Cow<'static, str>>,
    pub empty: Option<Cow<'static, str>>,
    pub left: Option<Cow<'static, str>>,
    pub right: Option<Cow<'static, str>>,
    pub color: Option<Color>,
    pub length: Option<usize>,
}

impl AppearanceUpdate {
    pub fn new() -> AppearanceUpdate {
        AppearanceUpdate::default()
    }

    pub fn fill(mut self, s: impl Into<Cow<'static, str>>) -> AppearanceUpdate {
        self.fill = Some(s.into());
        self
    }

    pub fn empty(mut self, s: impl Into<Cow<'static, str>>) -> AppearanceUpdate {
        self.empty = Some(s.into());
        self
    }

    pub fn left(mut self, s: impl Into<Cow<'static, str>>) -> AppearanceUpdate {
        self.left = Some(s.into());
        self
    }

    pub fn right(mut self, s: impl Into<Cow<'static, str>>) -> AppearanceUpdate {
        self.right = Some(s.into());
        self
    }

    pub fn color(mut self, color: Color) -> AppearanceUpdate {
        self.color = Some(color);
        self
    }

    /// Sets the color by name; unknown names mean [`Color::Default`].
    pub fn color_name(self, name: &str) -> AppearanceUpdate {
        self.color(Color::from_name(name))
    }

    pub fn length(mut self, length: usize) -> AppearanceUpdate {
        self.length = Some(length);
        self
    }
}

/// Number of fill symbols for `value` out of `total`, rounded half away from zero.
///
/// An empty total counts as complete.
pub(crate) fn fill_count(length: usize, value: u64, total: u64) -> usize {
    if total == 0 {
        return length;
    }
    let filled = (length as f64 * value as f64 / total as f64).round() as usize;
    filled.min(length)
}

/// The percent field of a rendered bar, e.g. `"  50.0%"`.
///
/// The whole part is padded so the field stays [`PERCENT_WIDTH`] columns wide from `0.0%` up
/// to `100.0%`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Percent(pub(crate) f64);

impl Percent {
    /// Percentage of `value` out of `total`, rounded half away from zero to one decimal place.
    pub(crate) fn of(value: u64, total: u64) -> Percent {
        if total == 0 {
            return Percent(100.0);
        }
        Percent((1000.0 * value as f64 / total as f64).round() / 10.0)
    }

    fn spacing(self) -> &'static str {
        if self.0 < 10.0 {
            "   "
        } else if self.0 < 100.0 {
            "  "
        } else {
            " "
        }
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.1}%", self.spacing(), self.0)
    }
}
