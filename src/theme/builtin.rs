//! Built-in themes modelled on common CLI message severities.

use once_cell::sync::Lazy;

use super::theme::Theme;
use crate::color::Color;
use crate::style::Style;

fn theme(name: &str, codes: &[Color]) -> Theme {
    Theme::new(name, Style::new(codes.iter().copied()))
}

/// Green text, for informational messages.
pub static INFO: Lazy<Theme> = Lazy::new(|| theme("info", &[Color::OP_RESET, Color::FG_GREEN]));
/// Bold light cyan, for side notes.
pub static NOTE: Lazy<Theme> =
    Lazy::new(|| theme("note", &[Color::OP_BOLD, Color::FG_LIGHT_CYAN]));
/// Bold yellow, registered as `warning`.
pub static WARN: Lazy<Theme> = Lazy::new(|| theme("warning", &[Color::OP_BOLD, Color::FG_YELLOW]));
/// Light white on black.
pub static LIGHT: Lazy<Theme> =
    Lazy::new(|| theme("light", &[Color::FG_LIGHT_WHITE, Color::BG_BLACK]));
/// Light white on a red background.
pub static ERROR: Lazy<Theme> =
    Lazy::new(|| theme("error", &[Color::FG_LIGHT_WHITE, Color::BG_RED]));
/// Bold red.
pub static DANGER: Lazy<Theme> = Lazy::new(|| theme("danger", &[Color::OP_BOLD, Color::FG_RED]));
/// Cyan, for debug output.
pub static DEBUG: Lazy<Theme> = Lazy::new(|| theme("debug", &[Color::OP_RESET, Color::FG_CYAN]));
/// Bold cyan.
pub static NOTICE: Lazy<Theme> = Lazy::new(|| theme("notice", &[Color::OP_BOLD, Color::FG_CYAN]));
/// Light yellow, for comments.
pub static COMMENT: Lazy<Theme> =
    Lazy::new(|| theme("comment", &[Color::OP_RESET, Color::FG_LIGHT_YELLOW]));
/// Bold green.
pub static SUCCESS: Lazy<Theme> =
    Lazy::new(|| theme("success", &[Color::OP_BOLD, Color::FG_GREEN]));
/// Blue.
pub static PRIMARY: Lazy<Theme> =
    Lazy::new(|| theme("primary", &[Color::OP_RESET, Color::FG_BLUE]));
/// Magenta, for questions to the user.
pub static QUESTION: Lazy<Theme> =
    Lazy::new(|| theme("question", &[Color::OP_RESET, Color::FG_MAGENTA]));
/// Dark gray, for de-emphasized text.
pub static SECONDARY: Lazy<Theme> = Lazy::new(|| theme("secondary", &[Color::FG_DARK_GRAY]));

/// Short names resolved by style lookup only.
pub(crate) const BUILTIN_ALIASES: &[(&str, &str)] =
    &[("err", "error"), ("suc", "success"), ("warn", "warning")];

pub(crate) fn builtin_themes() -> [&'static Theme; 13] {
    [
        &*INFO,
        &*NOTE,
        &*WARN,
        &*LIGHT,
        &*ERROR,
        &*DANGER,
        &*DEBUG,
        &*NOTICE,
        &*COMMENT,
        &*SUCCESS,
        &*PRIMARY,
        &*QUESTION,
        &*SECONDARY,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let mut names: Vec<&str> = builtin_themes().iter().map(|t| t.name()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "comment",
                "danger",
                "debug",
                "error",
                "info",
                "light",
                "note",
                "notice",
                "primary",
                "question",
                "secondary",
                "success",
                "warning",
            ]
        );
    }

    #[test]
    fn test_builtin_codes() {
        assert_eq!(INFO.code(), "0;32");
        assert_eq!(WARN.code(), "1;33");
        assert_eq!(ERROR.code(), "97;41");
        assert_eq!(SECONDARY.code(), "90");
    }

    #[test]
    fn test_aliases_point_at_builtins() {
        let names: Vec<&str> = builtin_themes().iter().map(|t| t.name()).collect();
        for (_, target) in BUILTIN_ALIASES {
            assert!(names.contains(target), "alias target {} missing", target);
        }
    }
}
