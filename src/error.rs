//! Error types for fixture generation and encoding.
//!
//! Every error in this crate is fatal for the run that raised it: generation is
//! deterministic, so there is nothing to retry. The variants map onto the
//! conditions a caller can actually trigger:
//!
//! - **Dialect errors**: a grammar that cannot be represented (non-ASCII
//!   separators, out-of-range radixes)
//! - **Sign errors**: a negative magnitude under [`SignPolicy::None`](crate::SignPolicy::None)
//! - **Encoding errors**: values with no structured-text kind, or tables that
//!   would produce invalid text
//! - **Consistency errors**: multi-variant cases whose expectations disagree
//! - **Not implemented**: extension points that are reserved but not built
//!
//! ## Examples
//!
//! ```rust
//! use numeric_fixtures::{Dialect, Error};
//!
//! let err = Dialect::builder().with_digit_separator(Some('’')).build().unwrap_err();
//! assert!(matches!(err, Error::InvalidDialect(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while generating or encoding fixtures.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while appending to a fixture file
    #[error("IO error: {0}")]
    Io(String),

    /// The dialect configuration cannot be represented
    #[error("Invalid dialect: {0}")]
    InvalidDialect(String),

    /// A sign policy was asked to render a sign it forbids
    #[error("Sign policy violation: {0}")]
    SignPolicy(String),

    /// Case toggling requested outside the ASCII plane
    #[error("Character {0:?} is outside the ASCII plane")]
    NonAscii(char),

    /// Value with no structured-text representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A table that cannot be encoded with the requested line mode
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// A multi-variant case whose variants are not equivalent
    #[error("Inconsistent case \"{title}\": {msg}")]
    InconsistentCase { title: String, msg: String },

    /// No catalog descriptor carries this id
    #[error("Unknown flag id {0}")]
    UnknownFlag(u16),

    /// Reserved extension point
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid dialect error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::Error;
    ///
    /// let err = Error::invalid_dialect("radix 1 is out of range");
    /// assert!(err.to_string().contains("radix 1"));
    /// ```
    pub fn invalid_dialect(msg: &str) -> Self {
        Error::InvalidDialect(msg.to_string())
    }

    /// Creates a sign policy violation.
    pub fn sign_policy(msg: &str) -> Self {
        Error::SignPolicy(msg.to_string())
    }

    /// Creates an unsupported type error for values with no structured-text kind.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an invalid table error.
    pub fn invalid_table(msg: &str) -> Self {
        Error::InvalidTable(msg.to_string())
    }

    /// Creates a consistency error for a multi-variant case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::Error;
    ///
    /// let err = Error::inconsistent_case("Simple.", "expected values disagree");
    /// assert!(err.to_string().contains("Simple."));
    /// ```
    pub fn inconsistent_case(title: &str, msg: &str) -> Self {
        Error::InconsistentCase {
            title: title.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a not-implemented error for a reserved extension point.
    pub fn not_implemented(what: &str) -> Self {
        Error::NotImplemented(what.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for fixture file failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
