//! Sample arguments passed to a `solution`.
//!
//! Arguments are prepared ahead of time (hard-coded or embedded in a sample
//! case) and never derived from user input at runtime.

use std::fmt;

use anyhow::{Result, bail};

use crate::error::HarnessError;
use crate::value::Value;

/// Shape of a parameter, used to declare a `solution`'s contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Int,
    Bool,
    Str,
    Ints,
    Chars,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::Int => "int",
            ArgKind::Bool => "boolean",
            ArgKind::Str => "string",
            ArgKind::Ints => "int[]",
            ArgKind::Chars => "char[]",
        };
        f.write_str(name)
    }
}

/// A single sample argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Int(i64),
    Bool(bool),
    Str(String),
    Ints(Vec<i32>),
    Chars(Vec<char>),
}

impl Arg {
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Int(_) => ArgKind::Int,
            Arg::Bool(_) => ArgKind::Bool,
            Arg::Str(_) => ArgKind::Str,
            Arg::Ints(_) => ArgKind::Ints,
            Arg::Chars(_) => ArgKind::Chars,
        }
    }

    /// Printable form, used when a void `solution` mutated this argument.
    pub fn to_value(&self) -> Value {
        match self {
            Arg::Int(number) => Value::Int(*number),
            Arg::Bool(flag) => Value::Bool(*flag),
            Arg::Str(text) => Value::Text(text.clone()),
            Arg::Ints(items) => Value::Ints(items.clone()),
            Arg::Chars(items) => Value::Chars(items.clone()),
        }
    }

    /// Convert a TOML literal into an argument.
    ///
    /// Arrays are typed by their first element: strings make a `char[]`
    /// (each element must be one character), anything else an `int[]`.
    /// An empty array is an empty `int[]`.
    pub fn from_toml(value: &toml::Value) -> Result<Self> {
        match value {
            toml::Value::Boolean(flag) => Ok(Arg::Bool(*flag)),
            toml::Value::Integer(number) => Ok(Arg::Int(*number)),
            toml::Value::String(text) => Ok(Arg::Str(text.clone())),
            toml::Value::Array(items) => match items.first() {
                None => Ok(Arg::Ints(Vec::new())),
                Some(toml::Value::String(_)) => items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| single_char(index, item))
                    .collect::<Result<Vec<_>>>()
                    .map(Arg::Chars),
                Some(_) => items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| small_int(index, item))
                    .collect::<Result<Vec<_>>>()
                    .map(Arg::Ints),
            },
            other => bail!("unsupported argument literal {}", other.type_str()),
        }
    }

    pub fn as_int(&self) -> Result<i64, HarnessError> {
        match self {
            Arg::Int(number) => Ok(*number),
            other => Err(other.mismatch(ArgKind::Int)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, HarnessError> {
        match self {
            Arg::Bool(flag) => Ok(*flag),
            other => Err(other.mismatch(ArgKind::Bool)),
        }
    }

    pub fn as_str(&self) -> Result<&str, HarnessError> {
        match self {
            Arg::Str(text) => Ok(text),
            other => Err(other.mismatch(ArgKind::Str)),
        }
    }

    pub fn as_ints(&self) -> Result<&[i32], HarnessError> {
        match self {
            Arg::Ints(items) => Ok(items),
            other => Err(other.mismatch(ArgKind::Ints)),
        }
    }

    pub fn as_chars_mut(&mut self) -> Result<&mut Vec<char>, HarnessError> {
        match self {
            Arg::Chars(items) => Ok(items),
            other => Err(other.mismatch(ArgKind::Chars)),
        }
    }

    fn mismatch(&self, expected: ArgKind) -> HarnessError {
        HarnessError::argument_mismatch(format!("expected {expected}, got {}", self.kind()))
    }
}

fn single_char(index: usize, item: &toml::Value) -> Result<char> {
    let Some(text) = item.as_str() else {
        bail!("element {index}: expected a string, got {}", item.type_str());
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => bail!("element {index}: expected a single character, got {text:?}"),
    }
}

fn small_int(index: usize, item: &toml::Value) -> Result<i32> {
    let Some(number) = item.as_integer() else {
        bail!("element {index}: expected an integer, got {}", item.type_str());
    };
    match i32::try_from(number) {
        Ok(number) => Ok(number),
        Err(_) => bail!("element {index}: {number} does not fit in int"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(literal: &str) -> Result<Arg> {
        let doc: toml::Table = toml::from_str(&format!("v = {literal}")).expect("toml literal");
        Arg::from_toml(doc.get("v").expect("literal"))
    }

    #[test]
    fn scalars_convert_directly() {
        assert_eq!(parse("9").expect("int"), Arg::Int(9));
        assert_eq!(parse("true").expect("bool"), Arg::Bool(true));
        assert_eq!(
            parse("\"A man, a plan\"").expect("str"),
            Arg::Str("A man, a plan".to_string())
        );
    }

    #[test]
    fn arrays_are_typed_by_first_element() {
        assert_eq!(
            parse("[2, 7, 11, 15]").expect("ints"),
            Arg::Ints(vec![2, 7, 11, 15])
        );
        assert_eq!(
            parse("[\"h\", \"i\"]").expect("chars"),
            Arg::Chars(vec!['h', 'i'])
        );
        assert_eq!(parse("[]").expect("empty"), Arg::Ints(Vec::new()));
    }

    #[test]
    fn rejects_malformed_arrays() {
        let err = parse("[\"ab\"]").expect_err("multi-char element");
        assert!(err.to_string().contains("single character"));
        let err = parse("[1, \"a\"]").expect_err("mixed array");
        assert!(err.to_string().contains("element 1"));
        let err = parse("[3000000000]").expect_err("overflow");
        assert!(err.to_string().contains("does not fit"));
    }

    #[test]
    fn rejects_unsupported_literals() {
        let err = parse("1.5").expect_err("float");
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn accessor_mismatch_is_argument_mismatch() {
        let err = Arg::Str("x".to_string()).as_ints().expect_err("wrong kind");
        assert_eq!(
            err,
            HarnessError::argument_mismatch("expected int[], got string")
        );
    }

    #[test]
    fn to_value_keeps_shape() {
        assert_eq!(Arg::Chars(vec!['o']).to_value(), Value::Chars(vec!['o']));
        assert_eq!(Arg::Str("s".to_string()).to_value(), Value::Text("s".to_string()));
    }
}
