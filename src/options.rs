//! Configuration options for the structured-text encoder.
//!
//! - [`Line`]: the line mode requested for a string, array or table
//! - [`EncodeOptions`]: indentation and inline-width policy
//!
//! ## Examples
//!
//! ```rust
//! use numeric_fixtures::{EncodeOptions, Encoder, Line, Value};
//!
//! let values = Value::from(vec![Value::from(1), Value::from(2)]);
//!
//! // Force every array onto multiple lines
//! let encoder = Encoder::new(EncodeOptions::new().with_max_inline_width(0));
//! let text = encoder.value(&values, Line::Guess, 0).unwrap();
//! assert_eq!(numeric_fixtures::ansi::strip(&text), "[\n  1,\n  2\n]");
//! ```

/// Line mode for an encoded value.
///
/// `Guess` lets the encoder choose from the content. Tables refuse `Guess`:
/// the caller must decide, since an inline table can never span lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Line {
    Single,
    Multi,
    #[default]
    Guess,
}

/// Configuration options for the structured-text encoder.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::EncodeOptions;
///
/// let options = EncodeOptions::new();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.max_inline_width, 80);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Spaces added per nesting level in multi-line arrays.
    pub indent: usize,
    /// Widest guessed array that stays on one line. Each element counts its
    /// rendered width plus two characters of separator.
    pub max_inline_width: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            max_inline_width: 80,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (2-space indent, 80-column inline arrays).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::EncodeOptions;
    ///
    /// let options = EncodeOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the widest guessed array kept on a single line.
    #[must_use]
    pub fn with_max_inline_width(mut self, width: usize) -> Self {
        self.max_inline_width = width;
        self
    }
}
