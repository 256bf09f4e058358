//! # numeric_fixtures
//!
//! Conformance fixtures for numeric literal and numeric string parsers.
//!
//! ## What is a fixture?
//!
//! Languages and data formats disagree on what a number looks like: digit
//! separators, exponent syntax, sign rules, leading zeros, base prefixes and
//! suffixes, and spellings of NaN and infinity. A fixture captures one
//! dialect's grammar as a list of named cases. Each case pairs input tokens
//! with the canonical decimal they must decode to and the outcome a correct
//! parser produces: `pass`, `fail`, or `assert` for a value mismatch.
//!
//! ## Key Features
//!
//! - **Exact expectations**: values are composed from exact rationals, so a
//!   binary `11.11` expects `3.75` with no floating-point noise
//! - **Stable catalog**: every case references one of 62 [`Flag`]s whose ids
//!   never change between dialects
//! - **Consistent variants**: multi-variant cases are checked to share one
//!   expectation before they are emitted
//! - **Two views, one text**: the console view is coloured, the persisted
//!   view is the same text with escapes stripped
//!
//! ## Quick Start
//!
//! ```rust
//! use numeric_fixtures::{Dialect, Fixture, Metadata, SignPolicy};
//!
//! let dialect = Dialect::builder()
//!     .with_mantissa_sign(SignPolicy::NoPositive)
//!     .with_base_prefix(Some('x'))
//!     .build()
//!     .unwrap();
//! let metadata = Metadata::new("Rust {version}", "rust").with_literal(true);
//!
//! let fixture = Fixture::generate(&dialect, metadata).unwrap();
//! let text = fixture.to_string().unwrap();
//!
//! assert!(text.starts_with("[metadata]\ntitle = \"Rust {version}\"\n"));
//! assert!(text.contains("value = \"0x1_1\"\n"));
//! ```
//!
//! ### Streaming
//!
//! [`write_fixture`] writes blocks as they are generated, to a `String` or a
//! [`Logger`]:
//!
//! ```rust
//! use numeric_fixtures::{ansi, write_fixture, Dialect, Metadata};
//!
//! let mut text = String::new();
//! write_fixture(&Dialect::default(), &Metadata::new("C", "c"), &mut text).unwrap();
//! assert!(ansi::strip(&text).contains("# Special Values\n"));
//! ```
//!
//! ### Structured values
//!
//! The encoder writes a small TOML subset and accepts any [`serde::Serialize`]
//! type with a structured-text shape:
//!
//! ```rust
//! use numeric_fixtures::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x = 1\ny = 2");
//! assert_eq!(to_string(&vec![1, 2]).unwrap(), "[1, 2]");
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T>`]. Errors are fatal for the fixture
//! being built:
//!
//! ```rust
//! use numeric_fixtures::{Dialect, Error, FeatureArea, Generator};
//!
//! let dialect = Dialect::default();
//! let err = Generator::new(&dialect)
//!     .collect(FeatureArea::BaseDigitSeparators)
//!     .unwrap_err();
//! assert!(matches!(err, Error::NotImplemented(_)));
//! ```

pub mod ansi;
pub mod case;
pub mod catalog;
pub mod decimal;
pub mod dialect;
pub mod encode;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod logger;
pub mod map;
pub mod options;
pub mod radix;
pub mod ser;
pub mod value;

pub use case::{NumericKind, TestCase, Variants};
pub use catalog::{Flag, FlagDescriptor, Outcome};
pub use decimal::{Composer, Decimal, Fraction};
pub use dialect::{Dialect, DialectBuilder, SignPolicy};
pub use encode::Encoder;
pub use error::{Error, Result};
pub use fixture::{write_fixture, Fixture, Metadata, Output};
pub use generator::{FeatureArea, Generator};
pub use logger::Logger;
pub use map::Table;
pub use options::{EncodeOptions, Line};
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

use serde::Serialize;
use std::path::Path;

/// Serialize any `T: Serialize` to structured text, with colours stripped.
///
/// Tables are written one pair per line; every other value is written the
/// way the encoder would write it on the right of `=`.
///
/// # Errors
///
/// Returns an error if the value has no structured-text kind (for example
/// `None` or `()`).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(ansi::strip(&to_console_string(value)?).into_owned())
}

/// Serialize any `T: Serialize` to coloured structured text.
///
/// # Errors
///
/// Returns an error if the value has no structured-text kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_console_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let encoder = Encoder::default();
    match to_value(value)? {
        Value::Table(table) => encoder.table(&table, Line::Multi),
        other => encoder.value(&other, Line::Guess, 0),
    }
}

/// Generates fixtures for every dialect listed in a config file.
///
/// # Errors
///
/// Always returns [`Error::NotImplemented`]; batch generation is reserved.
pub fn create_from_config(config: &Path, output_dir: &Path) -> Result<()> {
    Err(Error::not_implemented(&format!(
        "batch generation from {} into {}",
        config.display(),
        output_dir.display()
    )))
}

/// Installs a tracing subscriber for unit tests. Safe to call repeatedly.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
