//! Runtime value types for lookup keys, candidates and results.
//!
//! The [`Value`] enum is the already-classified form of whatever the host
//! environment stores in a cell. Hosts convert their native representation
//! into `Value` before calling the engine and convert the returned `Value`
//! back afterwards.

use std::borrow::Cow;
use std::fmt;

/// A single cell value.
///
/// Equality and ordering rules live in [`crate::is_match`] and
/// [`crate::compare_numbers`]. `Value` derives `PartialEq` only for
/// structural comparison in tests and host code; the engine never uses it.
///
/// # Example
///
/// ```
/// use xlookup::Value;
///
/// let row = vec![Value::from("Apple"), Value::from(1.25), Value::Absent];
/// assert!(row[0].is_text());
/// assert_eq!(row[1].as_number(), Some(1.25));
/// assert_eq!(row[2].canonical_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Numeric value. Integers from the host are widened to `f64`.
    Number(f64),
    /// Text value.
    Text(String),
    /// Empty cell, null, or missing argument.
    #[default]
    Absent,
    /// Any other host value (booleans, errors, handles). Holds the host's
    /// display text, which is only consulted by wildcard matching.
    Other(String),
}

impl Value {
    /// Returns `true` if this is an `Absent` value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is an `Other` value.
    pub fn is_other(&self) -> bool {
        matches!(self, Value::Other(_))
    }

    /// Extracts the number, if present.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the text, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the name of this value's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Absent => "absent",
            Value::Other(_) => "other",
        }
    }

    /// Returns the locale-invariant text form of this value.
    ///
    /// Numbers use the shortest representation that round-trips
    /// (`5.0` becomes `"5"`, `0.1` stays `"0.1"`), with `.` as the decimal
    /// separator regardless of locale. `Absent` becomes the empty string.
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Text(s) | Value::Other(s) => Cow::Borrowed(s),
            Value::Absent => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_checks() {
        assert!(Value::Number(1.0).is_number());
        assert!(Value::Text("a".into()).is_text());
        assert!(Value::Absent.is_absent());
        assert!(Value::Other("TRUE".into()).is_other());
        assert!(!Value::Absent.is_number());
    }

    #[test]
    fn value_extractors() {
        assert_eq!(Value::Number(4.5).as_number(), Some(4.5));
        assert_eq!(Value::Text("x".into()).as_text(), Some("x"));

        // Wrong kind returns None
        assert_eq!(Value::Text("1".into()).as_number(), None);
        assert_eq!(Value::Number(1.0).as_text(), None);
        assert_eq!(Value::Other("1".into()).as_text(), None);
    }

    #[test]
    fn canonical_text_numbers() {
        assert_eq!(Value::Number(5.0).canonical_text(), "5");
        assert_eq!(Value::Number(1.5).canonical_text(), "1.5");
        assert_eq!(Value::Number(-12.0).canonical_text(), "-12");
        assert_eq!(Value::Number(0.1).canonical_text(), "0.1");
    }

    #[test]
    fn canonical_text_other_kinds() {
        assert_eq!(Value::Text("Apple".into()).canonical_text(), "Apple");
        assert_eq!(Value::Absent.canonical_text(), "");
        assert_eq!(Value::Other("TRUE".into()).canonical_text(), "TRUE");
        assert_eq!(Value::Number(2.0).to_string(), "2");
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from(3), Value::Number(3.0));
        assert_eq!(Value::from(3i64), Value::Number(3.0));
        assert_eq!(Value::from("a"), Value::Text("a".into()));
        assert_eq!(Value::from(None::<f64>), Value::Absent);
        assert_eq!(Value::from(Some("b")), Value::Text("b".into()));
        assert_eq!(Value::default(), Value::Absent);
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::Number(0.0).kind_name(), "number");
        assert_eq!(Value::Text(String::new()).kind_name(), "text");
        assert_eq!(Value::Absent.kind_name(), "absent");
        assert_eq!(Value::Other(String::new()).kind_name(), "other");
    }
}
