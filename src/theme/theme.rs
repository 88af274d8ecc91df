//! Theme struct.

use std::fmt::{self, Arguments};
use std::io::{self, Write};

use minijinja::Value;

use crate::output::write_out;
use crate::style::Style;

/// A named [`Style`].
///
/// The name doubles as a display label: the `tips`, `prompt` and `block`
/// helpers print it uppercased in front of the message. Every rendering
/// method of [`Style`] is available and delegates to the wrapped style.
///
/// # Example
///
/// ```rust
/// use ansitheme::{Color, Style, Theme};
///
/// let theme = Theme::new("deploy", Style::new([Color::OP_BOLD, Color::FG_BLUE]));
/// assert_eq!(theme.title(), "DEPLOY");
/// assert_eq!(
///     theme.sprint_prompt(format_args!("{} hosts", 3)),
///     "\x1b[1;34mDEPLOY: 3 hosts\x1b[0m\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    style: Style,
}

impl Theme {
    /// Creates a theme. Nothing is registered until [`Theme::save`].
    pub fn new(name: impl Into<String>, style: Style) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    /// Returns the theme name as registered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wrapped style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns the display label, the uppercased name.
    pub fn title(&self) -> String {
        self.name.to_uppercase()
    }

    /// Registers the theme, and its style, under the theme name in the
    /// process-wide registry.
    pub fn save(&self) {
        crate::registry::add_theme(&self.name, self.style.clone());
    }

    /// Delegates to [`Style::code`].
    pub fn code(&self) -> String {
        self.style.code()
    }

    /// Delegates to [`Style::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.style.is_empty()
    }

    /// Delegates to [`Style::render`].
    pub fn render(&self, args: &[Value]) -> String {
        self.style.render(args)
    }

    /// Delegates to [`Style::sprint`].
    pub fn sprint(&self, args: &[Value]) -> String {
        self.style.sprint(args)
    }

    /// Delegates to [`Style::renderln`].
    pub fn renderln(&self, args: &[Value]) -> String {
        self.style.renderln(args)
    }

    /// Delegates to [`Style::sprintln`].
    pub fn sprintln(&self, args: &[Value]) -> String {
        self.style.sprintln(args)
    }

    /// Delegates to [`Style::sprintf`].
    pub fn sprintf(&self, args: Arguments<'_>) -> String {
        self.style.sprintf(args)
    }

    /// Delegates to [`Style::print`].
    pub fn print(&self, args: &[Value]) {
        self.style.print(args)
    }

    /// Delegates to [`Style::printf`].
    pub fn printf(&self, args: Arguments<'_>) {
        self.style.printf(args)
    }

    /// Delegates to [`Style::println`].
    pub fn println(&self, args: &[Value]) {
        self.style.println(args)
    }

    /// Delegates to [`Style::write_to`].
    pub fn write_to<W: Write>(&self, writer: &mut W, args: &[Value]) -> io::Result<()> {
        self.style.write_to(writer, args)
    }

    /// Delegates to [`Style::writeln_to`].
    pub fn writeln_to<W: Write>(&self, writer: &mut W, args: &[Value]) -> io::Result<()> {
        self.style.writeln_to(writer, args)
    }

    /// Label styled, message plain: `"\x1b[..mINFO: \x1b[0m" + message + "\n"`.
    pub fn sprint_tips(&self, args: Arguments<'_>) -> String {
        let mut out = self.style.render(&[Value::from(format!("{}: ", self.title()))]);
        out.push_str(&fmt::format(args));
        out.push('\n');
        out
    }

    /// Label and message styled together on one line.
    pub fn sprint_prompt(&self, args: Arguments<'_>) -> String {
        let title = format!("{}:", self.title());
        self.style
            .sprintln(&[Value::from(title), Value::from(fmt::format(args))])
    }

    /// Like [`Theme::sprint_prompt`], but the label sits on its own line.
    pub fn sprint_block(&self, args: Arguments<'_>) -> String {
        let title = format!("{}:\n", self.title());
        self.style
            .sprintln(&[Value::from(title), Value::from(fmt::format(args))])
    }

    /// Prints the styled label followed by the unstyled message.
    pub fn tips(&self, args: Arguments<'_>) {
        write_out(&self.sprint_tips(args));
    }

    /// Prints label and message, both styled, on one line.
    pub fn prompt(&self, args: Arguments<'_>) {
        write_out(&self.sprint_prompt(args));
    }

    /// Prints the label on its own line, then the message, both styled.
    pub fn block(&self, args: Arguments<'_>) {
        write_out(&self.sprint_block(args));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::output::capture::Capture;
    use crate::output::reset_output;
    use serial_test::serial;

    fn green(name: &str) -> Theme {
        Theme::new(name, Style::from(Color::FG_GREEN))
    }

    #[test]
    fn test_theme_accessors() {
        let theme = green("info");
        assert_eq!(theme.name(), "info");
        assert_eq!(theme.title(), "INFO");
        assert_eq!(theme.style(), &Style::from(Color::FG_GREEN));
        assert_eq!(theme.code(), "32");
        assert!(!theme.is_empty());
    }

    #[test]
    fn test_theme_delegates_rendering() {
        let theme = green("info");
        let args = [Value::from("a"), Value::from("b")];
        assert_eq!(theme.render(&args), theme.style().render(&args));
        assert_eq!(theme.sprint(&args), theme.style().render(&args));
        assert_eq!(theme.renderln(&args), "\x1b[32ma b\x1b[0m");
        assert_eq!(theme.sprintln(&args), "\x1b[32ma b\x1b[0m\n");
        assert_eq!(theme.sprintf(format_args!("{}", 1)), "\x1b[32m1\x1b[0m");
    }

    #[test]
    fn test_sprint_tips_styles_only_label() {
        let theme = green("note");
        let out = theme.sprint_tips(format_args!("saved {} items", 4));
        assert_eq!(out, "\x1b[32mNOTE: \x1b[0msaved 4 items\n");
    }

    #[test]
    fn test_sprint_prompt_styles_everything() {
        let theme = green("info");
        let out = theme.sprint_prompt(format_args!("ready"));
        assert_eq!(out, "\x1b[32mINFO: ready\x1b[0m\n");
    }

    #[test]
    fn test_sprint_block_breaks_after_label() {
        let theme = green("info");
        let out = theme.sprint_block(format_args!("ready"));
        assert_eq!(out, "\x1b[32mINFO:\n ready\x1b[0m\n");
    }

    #[test]
    fn test_title_uppercases_unicode() {
        let theme = green("étape");
        assert_eq!(theme.title(), "ÉTAPE");
    }

    #[test]
    fn test_empty_theme_style_prompt_is_plain() {
        let theme = Theme::new("plain", Style::empty());
        assert_eq!(theme.sprint_prompt(format_args!("x")), "PLAIN: x\n");
        assert_eq!(theme.sprint_tips(format_args!("x")), "PLAIN: x\n");
    }

    #[test]
    #[serial]
    fn test_theme_print_helpers_write_once() {
        let capture = Capture::install();
        let theme = green("info");

        theme.tips(format_args!("a"));
        assert_eq!(capture.take(), "\x1b[32mINFO: \x1b[0ma\n");

        theme.prompt(format_args!("b"));
        assert_eq!(capture.take(), "\x1b[32mINFO: b\x1b[0m\n");

        theme.block(format_args!("c"));
        assert_eq!(capture.take(), "\x1b[32mINFO:\n c\x1b[0m\n");

        theme.println(&[Value::from("d")]);
        assert_eq!(capture.take(), "\x1b[32md\x1b[0m\n");

        reset_output();
    }
}
