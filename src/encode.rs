//! Structured-text encoding.
//!
//! The [`Encoder`] writes the subset of TOML that fixtures need: scalar pairs,
//! inline and multi-line arrays, inline tables, and top-level tables whose
//! members are one pair per line. Output is the console view (coloured when
//! colouring is on); strip it with [`ansi::strip`] for the persisted view.
//!
//! ## String policy
//!
//! - In [`Line::Guess`] a string goes multi-line (triple-quoted) when it has a
//!   line break or an embedded `"`; otherwise it is a single-line basic string.
//! - Backslash, backspace and form feed are always escaped. Newline and
//!   carriage return are escaped only in single-line strings.
//! - A multi-line string with line breaks starts with a newline, which the
//!   reader trims, so the content's own first line survives.
//! - If the content holds `"""`, the literal form `'''…'''` is used when the
//!   content needs no escapes; otherwise one quote of each run is escaped.
//!
//! ## Examples
//!
//! ```rust
//! use numeric_fixtures::{ansi, Encoder, Line};
//!
//! let encoder = Encoder::default();
//! let text = encoder.string("float(\"nan\")", Line::Guess);
//! assert_eq!(ansi::strip(&text), "\"\"\"float(\"nan\")\"\"\"");
//! ```

use crate::{ansi, EncodeOptions, Error, Line, Result, Table, Value};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;

static BARE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("bare key pattern is valid"));

/// Encoder for [`Value`]s.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    #[must_use]
    pub fn new(options: EncodeOptions) -> Self {
        Encoder { options }
    }

    #[must_use]
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes a key, bare when it matches `[A-Za-z0-9_-]+`, quoted otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::{ansi, Encoder};
    ///
    /// let encoder = Encoder::default();
    /// assert_eq!(ansi::strip(&encoder.key("mantissa-radix")), "mantissa-radix");
    /// assert_eq!(ansi::strip(&encoder.key("a b")), "\"a b\"");
    /// assert_eq!(ansi::strip(&encoder.key("")), "\"\"");
    /// ```
    pub fn key(&self, key: &str) -> String {
        if BARE_KEY.is_match(key) {
            ansi::key(key)
        } else {
            ansi::key(&single_line_string(key))
        }
    }

    /// Encodes any value. Nested tables are always written inline.
    ///
    /// # Errors
    ///
    /// Fails when an inline table would contain a multi-line member.
    pub fn value(&self, value: &Value, line: Line, indent: usize) -> Result<String> {
        match value {
            Value::Bool(b) => Ok(ansi::boolean(if *b { "true" } else { "false" })),
            Value::Integer(i) => Ok(ansi::number(&i.to_string())),
            Value::Float(f) => Ok(ansi::number(&float(*f))),
            Value::String(s) => Ok(self.string(s, line)),
            Value::Datetime(dt) => Ok(ansi::datetime(&datetime(dt))),
            Value::Array(values) => self.array(values, line, indent),
            Value::Table(table) => self.table(table, Line::Single),
        }
    }

    /// Encodes `key = value`.
    pub fn pair(&self, key: &str, value: &Value, line: Line) -> Result<String> {
        Ok(format!("{} = {}", self.key(key), self.value(value, line, 0)?))
    }

    pub fn string(&self, value: &str, line: Line) -> String {
        let has_break = value.contains('\n') || value.contains('\r');
        let text = match line {
            Line::Multi => multi_line_string(value),
            Line::Guess if has_break || value.contains('"') => multi_line_string(value),
            _ => single_line_string(value),
        };
        ansi::string(&text)
    }

    /// Encodes an array.
    ///
    /// With [`Line::Guess`] the array stays on one line when the rendered
    /// elements, plus two characters of separator each, fit within
    /// [`EncodeOptions::max_inline_width`].
    pub fn array(&self, values: &[Value], line: Line, indent: usize) -> Result<String> {
        if values.is_empty() {
            return Ok("[]".to_string());
        }

        let inner = indent + self.options.indent;
        let data = values
            .iter()
            .map(|value| self.value(value, line, inner))
            .collect::<Result<Vec<_>>>()?;

        let line = match line {
            Line::Guess => {
                let width: usize = data.iter().map(|item| ansi::display_width(item) + 2).sum();
                if width <= self.options.max_inline_width {
                    Line::Single
                } else {
                    Line::Multi
                }
            }
            other => other,
        };

        if line == Line::Multi {
            let space = " ".repeat(inner);
            let separator = format!(",\n{space}");
            Ok(format!(
                "[\n{space}{}\n{}]",
                data.join(&separator),
                " ".repeat(indent)
            ))
        } else {
            Ok(format!("[{}]", data.join(", ")))
        }
    }

    /// Encodes a table.
    ///
    /// [`Line::Multi`] writes one pair per line, the body of a `[header]`
    /// section. [`Line::Single`] writes an inline `{ k = v, … }` table.
    ///
    /// # Errors
    ///
    /// - [`Line::Guess`] is rejected: the caller must choose.
    /// - An inline table whose members render across several lines is
    ///   rejected before any text is produced.
    pub fn table(&self, table: &Table, line: Line) -> Result<String> {
        if line == Line::Guess {
            return Err(Error::invalid_table(
                "guessing the line mode of a table is not allowed",
            ));
        }

        let data = table
            .iter()
            .map(|(key, value)| self.pair(key, value, Line::Guess))
            .collect::<Result<Vec<_>>>()?;

        if line == Line::Multi {
            return Ok(data.join("\n"));
        }

        if let Some(index) = data.iter().position(|pair| pair.lines().count() > 1) {
            let key = table.keys().nth(index).map(String::as_str).unwrap_or_default();
            return Err(Error::invalid_table(&format!(
                "single-line table member \"{key}\" encodes across multiple lines"
            )));
        }

        if data.is_empty() {
            Ok("{}".to_string())
        } else {
            Ok(format!("{{ {} }}", data.join(", ")))
        }
    }

    /// Encodes `text` as `#`-prefixed comment lines.
    pub fn comment(&self, text: &str) -> String {
        let lines: Vec<String> = text.lines().map(|line| format!("# {line}")).collect();
        ansi::comment(&lines.join("\n"))
    }
}

fn float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        // Debug keeps a fractional part on whole numbers ("1.0", not "1").
        format!("{value:?}")
    }
}

fn datetime(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339()
}

fn escape(value: &str, multiline: bool) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\u{0008}' => escaped.push_str("\\b"),
            '\u{000C}' => escaped.push_str("\\f"),
            '\n' if !multiline => escaped.push_str("\\n"),
            '\r' if !multiline => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn single_line_string(value: &str) -> String {
    let escaped = escape(value, false);
    if !escaped.contains('"') {
        format!("\"{escaped}\"")
    } else if !value.contains('\'') && escaped == value {
        format!("'{value}'")
    } else {
        format!("\"{}\"", escaped.replace('"', "\\\""))
    }
}

fn multi_line_string(value: &str) -> String {
    let lead = if value.contains('\n') || value.contains('\r') {
        "\n"
    } else {
        ""
    };
    let escaped = escape(value, true);
    if !escaped.contains("\"\"\"") {
        format!("\"\"\"{lead}{escaped}\"\"\"")
    } else if !value.contains("'''") && escaped == value {
        format!("'''{lead}{value}'''")
    } else {
        format!("\"\"\"{lead}{}\"\"\"", escaped.replace("\"\"\"", "\"\"\\\""))
    }
}
