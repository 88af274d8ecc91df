//! The Style type.

use std::fmt::{self, Arguments};
use std::io::{self, Write};

use minijinja::Value;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::output::write_out;
use crate::render::{
    codes_to_sequence, ensure_newline, render_code, render_string, render_with_spaces,
};

/// An ordered collection of codes applied together.
///
/// Order is kept exactly as given so the emitted sequence is reproducible;
/// duplicates are kept and nothing is validated.
///
/// # Example
///
/// ```rust
/// use ansitheme::{args, Color, Style};
///
/// let style = Style::new([Color::OP_BOLD, Color::FG_RED]);
/// assert_eq!(style.code(), "1;31");
/// assert_eq!(style.render(&args!["boom"]), "\x1b[1;31mboom\x1b[0m");
///
/// // empty styles pass text through
/// assert_eq!(Style::empty().render(&args!["plain"]), "plain");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Vec<Color>);

impl Style {
    /// Creates a style from codes, in the given order.
    pub fn new<I: IntoIterator<Item = Color>>(codes: I) -> Self {
        Self(codes.into_iter().collect())
    }

    /// Creates a style with no codes.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the codes in order.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Returns the SGR parameter string, e.g. `"32;45;3"`.
    pub fn code(&self) -> String {
        codes_to_sequence(&self.0)
    }

    /// True when the style has no codes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders `args` joined print-style.
    pub fn render(&self, args: &[Value]) -> String {
        render_code(&self.code(), args)
    }

    /// Alias of [`Style::render`].
    pub fn sprint(&self, args: &[Value]) -> String {
        self.render(args)
    }

    /// Renders `args` joined println-style, without a trailing newline.
    pub fn renderln(&self, args: &[Value]) -> String {
        render_with_spaces(&self.code(), args)
    }

    /// Renders `args` println-style and terminates the line.
    pub fn sprintln(&self, args: &[Value]) -> String {
        ensure_newline(self.renderln(args))
    }

    /// Formats first, then wraps the result.
    ///
    /// ```rust
    /// use ansitheme::{Color, Style};
    ///
    /// let style = Style::from(Color::FG_GREEN);
    /// assert_eq!(style.sprintf(format_args!("{} files", 3)), "\x1b[32m3 files\x1b[0m");
    /// ```
    pub fn sprintf(&self, args: Arguments<'_>) -> String {
        render_string(&self.code(), &fmt::format(args))
    }

    /// Prints `args` joined print-style.
    pub fn print(&self, args: &[Value]) {
        write_out(&self.render(args));
    }

    /// Formats, wraps and prints. No newline is added.
    pub fn printf(&self, args: Arguments<'_>) {
        write_out(&self.sprintf(args));
    }

    /// Prints `args` joined println-style, followed by one newline.
    pub fn println(&self, args: &[Value]) {
        write_out(&self.sprintln(args));
    }

    /// Writes `args`, joined print-style, to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W, args: &[Value]) -> io::Result<()> {
        writer.write_all(self.render(args).as_bytes())
    }

    /// Writes `args`, joined println-style and newline terminated, to `writer`.
    pub fn writeln_to<W: Write>(&self, writer: &mut W, args: &[Value]) -> io::Result<()> {
        writer.write_all(self.sprintln(args).as_bytes())
    }

    /// Registers this style under `name` in the process-wide registry.
    ///
    /// An existing style of the same name is replaced.
    pub fn save(&self, name: &str) {
        crate::registry::add_style(name, self.clone());
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self(vec![color])
    }
}

impl From<Vec<Color>> for Style {
    fn from(codes: Vec<Color>) -> Self {
        Self(codes)
    }
}

impl FromIterator<Color> for Style {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter)
    }
}
