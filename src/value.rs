//! Structured values for the fixture encoder.
//!
//! [`Value`] is the closed set of kinds the encoder knows how to write:
//! booleans, integers, floats, strings, datetimes, arrays and tables. There is
//! no null; anything without one of these kinds is rejected when converted
//! with [`to_value`](crate::to_value).
//!
//! ## Examples
//!
//! ```rust
//! use numeric_fixtures::{Table, Value};
//!
//! let mut table = Table::new();
//! table.insert("literal".to_string(), Value::from(false));
//! table.insert("radix".to_string(), Value::from(10));
//! let value = Value::from(table);
//!
//! assert!(value.is_table());
//! assert_eq!(value.as_table().and_then(|t| t.get("radix")).and_then(|v| v.as_i64()), Some(10));
//! ```

use crate::{Line, Table};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed structured value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Datetime(DateTime<FixedOffset>),
    Array(Vec<Value>),
    Table(Table),
}

impl Value {
    /// Returns the name of this value's kind, as used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Datetime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` for integers and floats.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// Formats the value as plain (uncoloured) structured text with a guessed line mode.
///
/// A value that cannot be encoded (a single-line table with a multi-line
/// member) surfaces as [`fmt::Error`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoder = crate::Encoder::default();
        let text = encoder.value(self, Line::Guess, 0).map_err(|_| fmt::Error)?;
        f.write_str(&crate::ansi::strip(&text))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Datetime(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Table(table) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (k, v) in table {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Datetime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Datetime(value.fixed_offset())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(10u32), Value::Integer(10));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("pass"), Value::String("pass".to_string()));
    }

    #[test]
    fn test_accessors_match_kind() {
        let flag = Value::from(true);
        assert_eq!(flag.as_bool(), Some(true));
        assert_eq!(flag.as_i64(), None);

        let radix = Value::from(10u32);
        assert_eq!(radix.as_i64(), Some(10));
        assert!(radix.is_number());
        assert_eq!(radix.as_str(), None);

        let values = Value::from(vec![Value::from("NaN")]);
        assert_eq!(values.as_array().map(Vec::len), Some(1));
        assert_eq!(values.as_bool(), None);
        assert!(Value::from(Table::new()).as_array().is_none());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from(1).kind(), "integer");
        assert_eq!(Value::from(vec![Value::from(1)]).kind(), "array");
        assert_eq!(Value::from(Table::new()).kind(), "table");
    }

    #[test]
    fn test_display_is_plain_text() {
        let value = Value::from(vec![Value::from("a"), Value::from(1), Value::from(true)]);
        assert_eq!(value.to_string(), r#"["a", 1, true]"#);
    }

    #[test]
    fn test_datetime_from_utc() {
        let utc = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = Value::from(utc);
        assert_eq!(value.to_string(), "2024-01-15T10:30:00+00:00");
    }
}
