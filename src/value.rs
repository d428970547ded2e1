//! Runtime values and conversion strategies
//!
//! `Value` is the tagged type flowing through defaults, choices, and loader
//! results. `Convert` is the conversion applied to raw argument text: keep it
//! verbatim, parse it as a base-prefixed integer, or hand it to a
//! caller-supplied converter.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A resolved parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Signature for caller-supplied converters: pure `text -> value`, erroring
/// with a human-readable message on bad input.
pub type ConvertFn = dyn Fn(&str) -> Result<Value, String> + Send + Sync;

/// Conversion strategy applied to raw argument text.
#[derive(Clone, Default)]
pub enum Convert {
    /// Keep the raw text verbatim.
    #[default]
    Str,
    /// Base-prefix aware integer parsing (`0x…`, `0o…`, `0b…`, decimal).
    Int,
    /// Caller-supplied converter.
    Custom(Arc<ConvertFn>),
}

impl Convert {
    /// Wrap a plain function as a custom conversion strategy.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        Convert::Custom(Arc::new(f))
    }

    /// Run the strategy over raw text.
    pub fn apply(&self, raw: &str) -> Result<Value, String> {
        match self {
            Convert::Str => Ok(Value::Str(raw.to_string())),
            Convert::Int => parse_int(raw).map(Value::Int),
            Convert::Custom(f) => f(raw),
        }
    }
}

impl fmt::Debug for Convert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convert::Str => f.write_str("Str"),
            Convert::Int => f.write_str("Int"),
            Convert::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PartialEq for Convert {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Convert::Str, Convert::Str) | (Convert::Int, Convert::Int) => true,
            // Custom converters are opaque; equal only when they are the
            // same function object.
            (Convert::Custom(a), Convert::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Parse an integer literal with an optional sign and base prefix.
///
/// Accepts `0x`/`0X` hex, `0o`/`0O` octal, `0b`/`0B` binary, and plain
/// decimal, with internal underscores tolerated as digit separators.
pub fn parse_int(raw: &str) -> Result<i64, String> {
    let s = raw.trim();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (radix, digits) = if let Some(d) =
        unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, d)
    } else if let Some(d) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
        (8, d)
    } else if let Some(d) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
        (2, d)
    } else {
        (10, unsigned)
    };

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    // from_str_radix accepts a sign of its own; the sign was already
    // consumed above, so a remaining one is a malformed literal.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(format!("invalid integer literal {raw:?}"));
    }

    let magnitude = i64::from_str_radix(&digits, radix)
        .map_err(|_| format!("invalid integer literal {raw:?}"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_bases() {
        let cases = [
            ("0", 0),
            ("0x1aedead0b", 0x1aedead0b),
            ("0b0011", 3),
            ("-9571293", -9571293),
            ("0o17", 0o17),
            ("+42", 42),
            ("-0x10", -16),
            ("1_000_000", 1_000_000),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_int(text), Ok(expected), "literal {text:?}");
        }
    }

    #[test]
    fn test_parse_int_rejects_garbage() {
        for text in ["", "0x", "abc", "12z", "--4", "+-5", "-+5", "0x-4", "0b2"] {
            assert!(parse_int(text).is_err(), "literal {text:?} should fail");
        }
    }

    #[test]
    fn test_convert_str_is_verbatim() {
        for text in ["    ", "#123", "as_", "9 9"] {
            assert_eq!(Convert::Str.apply(text), Ok(Value::Str(text.to_string())));
        }
    }

    #[test]
    fn test_convert_custom_roundtrip_and_identity_equality() {
        let upper = Convert::custom(|s| Ok(Value::Str(s.to_ascii_uppercase())));
        assert_eq!(upper.apply("abc"), Ok(Value::Str("ABC".into())));

        let clone = upper.clone();
        assert_eq!(upper, clone);
        let other = Convert::custom(|s| Ok(Value::Str(s.to_ascii_uppercase())));
        assert_ne!(upper, other);
    }

    #[test]
    fn test_value_json_is_untagged() {
        assert_eq!(serde_json::to_string(&Value::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Value::Str("c1".into())).unwrap(), "\"c1\"");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
    }
}
