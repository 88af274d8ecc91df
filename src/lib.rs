//! # Ansitheme - Named ANSI styles for terminal messages
//!
//! `ansitheme` maps a small set of SGR codes (foreground, background, text
//! options) to escape sequences, and keeps named bundles of them for the
//! usual message categories: info, warning, error and friends.
//!
//! ## Core Concepts
//!
//! - [`Color`]: a single SGR parameter such as `FG_RED` (31) or `OP_BOLD` (1)
//! - [`Style`]: an ordered bundle of codes, rendered as `\x1b[1;31m...\x1b[0m`
//! - [`Theme`]: a named style whose name doubles as a message label
//! - [`Registry`]: name lookup for styles and themes, with style aliases
//!
//! ## Quick Start
//!
//! ```rust
//! use ansitheme::{args, get_style, Color, Style};
//!
//! let alert = Style::new([Color::OP_BOLD, Color::FG_RED]);
//! assert_eq!(alert.render(&args!["down"]), "\x1b[1;31mdown\x1b[0m");
//!
//! // aliases resolve to the canonical built-in
//! assert_eq!(get_style("err"), get_style("error"));
//!
//! // unknown names degrade to no styling
//! assert_eq!(get_style("nope").render(&args!["plain"]), "plain");
//! ```
//!
//! ## Print arguments
//!
//! Print-family methods take a slice of [`Value`]s so heterogeneous operands
//! can be joined the way `print` and `println` join them (see
//! [`join_print`]). The [`args!`] macro builds that slice. Format-first
//! variants (`sprintf`, `printf`, `infof`, ...) take `format_args!` output.
//!
//! ```rust
//! use ansitheme::{args, Color, Style};
//!
//! let style = Style::from(Color::FG_CYAN);
//! assert_eq!(style.render(&args!["n=", 1, 2]), "\x1b[36mn=1 2\x1b[0m");
//! assert_eq!(style.renderln(&args!["n=", 1, 2]), "\x1b[36mn= 1 2\x1b[0m");
//! assert_eq!(style.sprintf(format_args!("n={}", 1)), "\x1b[36mn=1\x1b[0m");
//! ```
//!
//! ## Themes and labels
//!
//! ```rust
//! use ansitheme::INFO;
//!
//! assert_eq!(
//!     INFO.sprint_tips(format_args!("{} files", 2)),
//!     "\x1b[0;32mINFO: \x1b[0m2 files\n"
//! );
//! ```
//!
//! Printing always goes through a single process-wide sink (stdout by
//! default, see [`set_output`]).

mod color;
mod output;
mod registry;
mod render;
mod style;
mod stylesheet;
mod theme;

use std::fmt::Arguments;

pub use minijinja::Value;

pub use color::{Color, ColorKind};
pub use output::{reset_output, set_output};
pub use registry::{
    add_alias, add_style, add_theme, get_style, get_theme, reset_registry, with_registry,
    with_registry_mut, Registry,
};
pub use render::{
    clear_code, codes_to_sequence, join_print, join_println, render_code, render_string,
    render_with_spaces, RESET_SEQUENCE,
};
pub use style::{Style, StylesheetError};
pub use stylesheet::Stylesheet;
pub use theme::{
    Theme, COMMENT, DANGER, DEBUG, ERROR, INFO, LIGHT, NOTE, NOTICE, PRIMARY, QUESTION, SECONDARY,
    SUCCESS, WARN,
};

/// Builds a `Vec<Value>` from heterogeneous expressions.
///
/// ```rust
/// use ansitheme::{args, join_print};
///
/// let values = args!["total:", 3, 4.5, true];
/// assert_eq!(join_print(&values), "total:3 4.5 true");
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

/// Prints a formatted message with the [`INFO`] theme.
pub fn infof(args: Arguments<'_>) {
    INFO.printf(args);
}

/// Prints a line with the [`INFO`] theme.
pub fn infoln(args: &[Value]) {
    INFO.println(args);
}

/// Prints a formatted message with the [`ERROR`] theme.
pub fn errorf(args: Arguments<'_>) {
    ERROR.printf(args);
}

/// Prints a line with the [`ERROR`] theme.
pub fn errorln(args: &[Value]) {
    ERROR.println(args);
}

/// Prints a formatted message with the [`WARN`] theme.
pub fn warnf(args: Arguments<'_>) {
    WARN.printf(args);
}

/// Prints a line with the [`WARN`] theme.
pub fn warnln(args: &[Value]) {
    WARN.println(args);
}

/// Prints a formatted message with the [`SUCCESS`] theme.
pub fn successf(args: Arguments<'_>) {
    SUCCESS.printf(args);
}

/// Prints a line with the [`SUCCESS`] theme.
pub fn successln(args: &[Value]) {
    SUCCESS.println(args);
}

/// Prints a formatted message with the [`NOTE`] theme.
pub fn notef(args: Arguments<'_>) {
    NOTE.printf(args);
}

/// Prints a line with the [`NOTE`] theme.
pub fn noteln(args: &[Value]) {
    NOTE.println(args);
}
