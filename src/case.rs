//! Test case records.

use crate::{Error, Flag, Result};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// One input token, or several grammar-equivalent tokens tested together.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Variants {
    One(String),
    Many(Vec<String>),
}

impl Variants {
    pub fn len(&self) -> usize {
        match self {
            Variants::One(_) => 1,
            Variants::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        match self {
            Variants::One(value) => std::slice::from_ref(value).iter(),
            Variants::Many(values) => values.iter(),
        }
    }
}

impl From<String> for Variants {
    fn from(value: String) -> Self {
        Variants::One(value)
    }
}

impl From<&str> for Variants {
    fn from(value: &str) -> Self {
        Variants::One(value.to_string())
    }
}

impl From<Vec<String>> for Variants {
    fn from(values: Vec<String>) -> Self {
        Variants::Many(values)
    }
}

/// The numeric kinds a fixture has a section for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Float,
    Int,
    Uint,
}

impl NumericKind {
    pub const ALL: [NumericKind; 3] = [NumericKind::Float, NumericKind::Int, NumericKind::Uint];

    /// Name of the array-of-tables section holding this kind's cases.
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            NumericKind::Float => "floats",
            NumericKind::Int => "ints",
            NumericKind::Uint => "uints",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

/// A case: input tokens, the flag they exercise, and what they decode to.
///
/// Serializes as `value`, `title`, `flags`, `outcome`, `expected`, in that
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct TestCase {
    flag: Flag,
    actual: Variants,
    expected: Variants,
}

impl TestCase {
    /// Builds a case, checking that variants are equivalent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::{Flag, TestCase};
    ///
    /// let case = TestCase::new(Flag::IntegerInternalDigitSeparator, "1_1", "11").unwrap();
    /// assert_eq!(case.title(), "Integer internal digit separator.");
    ///
    /// // disagreeing expectations are rejected
    /// let err = TestCase::new(
    ///     Flag::CaseSensitiveNan,
    ///     vec!["naN".to_string(), "NAN".to_string()],
    ///     vec!["NaN".to_string(), "nan".to_string()],
    /// );
    /// assert!(err.is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InconsistentCase`] when `actual` and `expected` differ
    /// in arity, either is empty, or the expectations disagree.
    pub fn new(
        flag: Flag,
        actual: impl Into<Variants>,
        expected: impl Into<Variants>,
    ) -> Result<Self> {
        let actual = actual.into();
        let expected = expected.into();

        if actual.is_empty() {
            return Err(Error::inconsistent_case(flag.title(), "no input variants"));
        }
        if actual.len() != expected.len() {
            return Err(Error::inconsistent_case(
                flag.title(),
                &format!(
                    "{} input variants but {} expectations",
                    actual.len(),
                    expected.len()
                ),
            ));
        }
        let mut values = expected.iter();
        if let Some(first) = values.next() {
            if let Some(other) = values.find(|value| *value != first) {
                return Err(Error::inconsistent_case(
                    flag.title(),
                    &format!("expectations disagree: \"{first}\" and \"{other}\""),
                ));
            }
        }

        Ok(TestCase {
            flag,
            actual,
            expected,
        })
    }

    pub fn flag(&self) -> Flag {
        self.flag
    }

    pub fn title(&self) -> &'static str {
        self.flag.title()
    }

    pub fn actual(&self) -> &Variants {
        &self.actual
    }

    pub fn expected(&self) -> &Variants {
        &self.expected
    }
}

impl Serialize for TestCase {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let descriptor = self.flag.descriptor();
        let mut state = serializer.serialize_struct("TestCase", 5)?;
        state.serialize_field("value", &self.actual)?;
        state.serialize_field("title", descriptor.title)?;
        state.serialize_field("flags", descriptor.short_code)?;
        state.serialize_field("outcome", &descriptor.outcome)?;
        state.serialize_field("expected", &self.expected)?;
        state.end()
    }
}
