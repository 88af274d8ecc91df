//! SGR sequence building and text wrapping.

use minijinja::Value;

use super::args::{join_print, join_println};
use crate::color::Color;

/// The sequence that resets all attributes.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// Joins codes with `;`, e.g. `[1, 31, 45]` becomes `"1;31;45"`.
///
/// An empty slice yields an empty string.
pub fn codes_to_sequence(codes: &[Color]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

/// Wraps already formatted text with `code` and a trailing reset.
///
/// An empty code returns the text unchanged.
///
/// # Example
///
/// ```rust
/// use ansitheme::render_string;
///
/// assert_eq!(render_string("1;31", "hello"), "\x1b[1;31mhello\x1b[0m");
/// assert_eq!(render_string("", "hello"), "hello");
/// ```
pub fn render_string(code: &str, text: &str) -> String {
    if code.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{}m{}{}", code, text, RESET_SEQUENCE)
}

/// Joins `args` print-style and wraps the result with `code`.
pub fn render_code(code: &str, args: &[Value]) -> String {
    render_string(code, &join_print(args))
}

/// Joins `args` println-style (always space separated) and wraps the result.
pub fn render_with_spaces(code: &str, args: &[Value]) -> String {
    render_string(code, &join_println(args))
}

/// Appends one `\n` unless the rendered text already ends with one.
///
/// The newline always lands after the reset sequence.
pub fn ensure_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

/// Removes ANSI escape sequences from `text`.
///
/// # Example
///
/// ```rust
/// use ansitheme::clear_code;
///
/// assert_eq!(clear_code("\x1b[1;31mhello\x1b[0m"), "hello");
/// ```
pub fn clear_code(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_codes_to_sequence() {
        let codes = [Color::OP_BOLD, Color::FG_RED, Color::BG_MAGENTA];
        assert_eq!(codes_to_sequence(&codes), "1;31;45");
    }

    #[test]
    fn test_codes_to_sequence_empty() {
        assert_eq!(codes_to_sequence(&[]), "");
    }

    #[test]
    fn test_codes_to_sequence_keeps_order_and_duplicates() {
        let codes = [Color::FG_RED, Color::OP_BOLD, Color::FG_RED];
        assert_eq!(codes_to_sequence(&codes), "31;1;31");
    }

    #[test]
    fn test_render_code_empty_is_passthrough() {
        assert_eq!(render_code("", &[Value::from("hello")]), "hello");
    }

    #[test]
    fn test_render_code_wraps() {
        assert_eq!(
            render_code("1;31", &[Value::from("hello")]),
            "\x1b[1;31mhello\x1b[0m"
        );
    }

    #[test]
    fn test_render_code_uses_print_join() {
        let args = [Value::from("n="), Value::from(1), Value::from(2)];
        assert_eq!(render_code("32", &args), "\x1b[32mn=1 2\x1b[0m");
        assert_eq!(render_code("", &args), "n=1 2");
    }

    #[test]
    fn test_render_with_spaces_uses_println_join() {
        let args = [Value::from("a"), Value::from("b")];
        assert_eq!(render_with_spaces("32", &args), "\x1b[32ma b\x1b[0m");
        assert_eq!(render_with_spaces("", &args), "a b");
    }

    #[test]
    fn test_render_string() {
        assert_eq!(render_string("", "x"), "x");
        assert_eq!(render_string("4", "x"), "\x1b[4mx\x1b[0m");
    }

    #[test]
    fn test_ensure_newline_after_reset() {
        let out = ensure_newline(render_string("31", "hi"));
        assert_eq!(out, "\x1b[31mhi\x1b[0m\n");
    }

    #[test]
    fn test_ensure_newline_does_not_double() {
        assert_eq!(ensure_newline("hi\n".to_string()), "hi\n");
        assert_eq!(ensure_newline(String::new()), "\n");
    }

    #[test]
    fn test_clear_code() {
        assert_eq!(clear_code("\x1b[32mok\x1b[0m done"), "ok done");
        assert_eq!(clear_code("plain"), "plain");
    }

    proptest! {
        #[test]
        fn prop_sequence_is_semicolon_joined(codes in prop::collection::vec(any::<u8>(), 1..12)) {
            let colors: Vec<Color> = codes.iter().copied().map(Color).collect();
            let seq = codes_to_sequence(&colors);
            let expected: Vec<String> = codes.iter().map(|c| c.to_string()).collect();

            prop_assert_eq!(seq.split(';').count(), codes.len());
            prop_assert!(!seq.ends_with(';'));
            prop_assert_eq!(seq, expected.join(";"));
        }

        #[test]
        fn prop_render_string_wraps_exactly(text in ".*", code in "[0-9]{1,3}(;[0-9]{1,3}){0,3}") {
            let out = render_string(&code, &text);
            let prefix = format!("\x1b[{}m", code);
            prop_assert!(out.starts_with(&prefix));
            prop_assert!(out.ends_with(RESET_SEQUENCE));
            prop_assert_eq!(&out[prefix.len()..out.len() - RESET_SEQUENCE.len()], text.as_str());
        }
    }
}
