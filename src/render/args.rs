//! Join policies for heterogeneous print arguments.

use minijinja::value::ValueKind;
use minijinja::Value;

fn is_string_like(value: &Value) -> bool {
    value.kind() == ValueKind::String
}

/// Renders one operand as `core::fmt` would, not as the template engine does.
///
/// Booleans print lowercase, `None` prints as `<nil>` and undefined as
/// nothing. Everything else uses the value's own `Display`.
fn display(value: &Value) -> String {
    match value.kind() {
        ValueKind::Bool => value.is_true().to_string(),
        ValueKind::None => "<nil>".to_string(),
        ValueKind::Undefined => String::new(),
        _ => value.to_string(),
    }
}

/// Joins values the way a plain `print` does.
///
/// A space is inserted between two adjacent operands only when neither of
/// them is a string. `["a", 1, 2, "b"]` therefore becomes `"a1 2b"`.
///
/// # Example
///
/// ```rust
/// use ansitheme::{args, join_print};
///
/// assert_eq!(join_print(&args!["a", 1, 2, "b"]), "a1 2b");
/// assert_eq!(join_print(&args!["x", "y"]), "xy");
/// ```
pub fn join_print(args: &[Value]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Value> = None;
    for arg in args {
        if let Some(prev) = prev {
            if !is_string_like(prev) && !is_string_like(arg) {
                out.push(' ');
            }
        }
        out.push_str(&display(arg));
        prev = Some(arg);
    }
    out
}

/// Joins values the way `println` does: always separated by one space.
///
/// No trailing newline is added here; that is the printer's job.
pub fn join_println(args: &[Value]) -> String {
    args.iter()
        .map(display)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_print_strings_are_adjacent() {
        let args = [Value::from("hello"), Value::from("world")];
        assert_eq!(join_print(&args), "helloworld");
    }

    #[test]
    fn test_join_print_non_strings_get_space() {
        let args = [Value::from(1), Value::from(2), Value::from(true)];
        assert_eq!(join_print(&args), "1 2 true");
    }

    #[test]
    fn test_join_print_mixed() {
        let args = [
            Value::from("a"),
            Value::from(1),
            Value::from(2),
            Value::from("b"),
            Value::from(3),
        ];
        assert_eq!(join_print(&args), "a1 2b3");
    }

    #[test]
    fn test_join_print_empty() {
        assert_eq!(join_print(&[]), "");
    }

    #[test]
    fn test_join_print_serialized_values() {
        let args = [Value::from_serialize(vec![1, 2]), Value::from(3)];
        assert_eq!(join_print(&args), "[1, 2] 3");
    }

    #[test]
    fn test_bools_print_lowercase() {
        assert_eq!(join_print(&[Value::from(true), Value::from(false)]), "true false");
        assert_eq!(
            join_println(&[Value::from("ok"), Value::from(true)]),
            "ok true"
        );
    }

    #[test]
    fn test_unit_and_undefined() {
        assert_eq!(join_println(&[Value::from(())]), "<nil>");
        assert_eq!(join_print(&[Value::from(1), Value::from(())]), "1 <nil>");
        assert_eq!(join_print(&[Value::UNDEFINED]), "");
    }

    #[test]
    fn test_floats_and_integers() {
        let args = [Value::from(2.5), Value::from(-0.25), Value::from(-7)];
        assert_eq!(join_print(&args), "2.5 -0.25 -7");
        assert_eq!(join_println(&args), "2.5 -0.25 -7");
    }

    #[test]
    fn test_join_println_always_spaces() {
        let args = [Value::from("a"), Value::from("b"), Value::from(3)];
        assert_eq!(join_println(&args), "a b 3");
    }

    #[test]
    fn test_join_println_single_and_empty() {
        assert_eq!(join_println(&[Value::from("only")]), "only");
        assert_eq!(join_println(&[]), "");
    }
}
