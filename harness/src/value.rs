//! Result values and their canonical text form.
//!
//! Every result a `solution` can produce has exactly one of these shapes.
//! Formatting dispatches on the variant:
//!
//! | shape   | printed as            |
//! |---------|-----------------------|
//! | `Null`  | `null`                |
//! | `Bool`  | `true` / `false`      |
//! | `Int`   | decimal               |
//! | `Ints`  | `[2, 7]`              |
//! | `Chars` | `["a", "b"]`          |
//! | `Text`  | the string, verbatim  |

use std::fmt;

/// A result produced by a challenge body (or its mutated first argument).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Ints(Vec<i32>),
    Chars(Vec<char>),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(flag) => write!(f, "{flag}"),
            Value::Int(number) => write!(f, "{number}"),
            Value::Ints(items) => write_seq(f, items, |f, item| write!(f, "{item}")),
            Value::Chars(items) => write_seq(f, items, |f, item| write!(f, "\"{item}\"")),
            Value::Text(text) => f.write_str(text),
        }
    }
}

fn write_seq<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    f.write_str("[")?;
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_str("]")
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Int(i64::from(number))
    }
}

impl From<Vec<i32>> for Value {
    fn from(items: Vec<i32>) -> Self {
        Value::Ints(items)
    }
}

impl From<Vec<char>> for Value {
    fn from(items: Vec<char>) -> Self {
        Value::Chars(items)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_prints_literal() {
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn int_sequence_is_comma_space_joined() {
        assert_eq!(Value::Ints(vec![2, 7]).to_string(), "[2, 7]");
        assert_eq!(Value::Ints(vec![-1, 0, 42]).to_string(), "[-1, 0, 42]");
    }

    #[test]
    fn empty_sequences_print_brackets_only() {
        assert_eq!(Value::Ints(Vec::new()).to_string(), "[]");
        assert_eq!(Value::Chars(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn char_sequence_quotes_each_element() {
        assert_eq!(Value::Chars(vec!['a', 'b']).to_string(), "[\"a\", \"b\"]");
    }

    #[test]
    fn booleans_are_lowercase() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn scalars_use_default_representation() {
        assert_eq!(Value::Int(-1).to_string(), "-1");
        assert_eq!(Value::from("amanaplan").to_string(), "amanaplan");
    }

    #[test]
    fn missing_option_becomes_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }
}
