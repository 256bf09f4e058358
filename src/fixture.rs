//! Fixture assembly.
//!
//! A fixture is a `[metadata]` table followed by `[[floats]]`, `[[ints]]` and
//! `[[uints]]` entries, one per case:
//!
//! ```toml
//! [metadata]
//! title = "Rust {version} literals"
//! literal = true
//! language = "rust"
//! radix = 10
//!
//! [[floats]]  # TEST 0
//! value = "19.5"
//! title = "Simple"
//! flags = ""
//! outcome = "pass"
//! expected = "19.5"
//! ```
//!
//! [`write_fixture`] streams that text in generation order, with a comment
//! above each feature area. [`Fixture`] collects the cases first and renders
//! them grouped by kind.

use crate::{
    ansi, to_value, Dialect, Encoder, Error, FeatureArea, Generator, Line, Logger, NumericKind,
    Result, Table, TestCase, Value,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::info;

/// Header fields that do not come from the dialect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// May hold `{version}` or `{lang}` placeholders, filled in by consumers.
    pub title: String,
    /// Whether cases are code literals rather than strings handed to a parser.
    pub literal: bool,
    pub language: String,
    pub description: Option<String>,
}

impl Metadata {
    #[must_use]
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Metadata {
            title: title.into(),
            literal: false,
            language: language.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: bool) -> Self {
        self.literal = literal;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = description.map(Into::into);
        self
    }

    /// The `[metadata]` table for `dialect`.
    ///
    /// A single `radix` key is written when the mantissa radix, exponent
    /// base and exponent radix agree; otherwise all three are written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::{Dialect, Metadata};
    ///
    /// let metadata = Metadata::new("Python {version}", "python");
    ///
    /// let table = metadata.table(&Dialect::default()).unwrap();
    /// assert!(table.contains_key("radix"));
    ///
    /// let hex = Dialect::builder()
    ///     .with_mantissa_radix(16)
    ///     .with_exponent_base(Some(2))
    ///     .with_exponent_radix(Some(10))
    ///     .build()
    ///     .unwrap();
    /// let table = metadata.table(&hex).unwrap();
    /// assert!(!table.contains_key("radix"));
    /// assert!(table.contains_key("exponent-base"));
    /// ```
    pub fn table(&self, dialect: &Dialect) -> Result<Table> {
        let header = Header {
            metadata: self,
            dialect,
        };
        match to_value(&header)? {
            Value::Table(table) => Ok(table),
            other => Err(Error::custom(format!(
                "metadata encoded as {}, not a table",
                other.kind()
            ))),
        }
    }
}

struct Header<'a> {
    metadata: &'a Metadata,
    dialect: &'a Dialect,
}

impl Serialize for Header<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let uniform = self.dialect.has_uniform_radix();
        let len = 3 + usize::from(self.metadata.description.is_some()) + if uniform { 1 } else { 3 };

        let mut state = serializer.serialize_struct("Metadata", len)?;
        state.serialize_field("title", &self.metadata.title)?;
        state.serialize_field("literal", &self.metadata.literal)?;
        state.serialize_field("language", &self.metadata.language)?;
        if let Some(description) = &self.metadata.description {
            state.serialize_field("description", description)?;
        }
        if uniform {
            state.serialize_field("radix", &self.dialect.mantissa_radix())?;
        } else {
            state.serialize_field("mantissa-radix", &self.dialect.mantissa_radix())?;
            state.serialize_field("exponent-base", &self.dialect.exponent_base())?;
            state.serialize_field("exponent-radix", &self.dialect.exponent_radix())?;
        }
        state.end()
    }
}

/// Destination for fixture text, one logical block per call.
pub trait Output {
    fn log(&mut self, text: &str) -> Result<()>;
}

/// Collects the console view, one line per block.
impl Output for String {
    fn log(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        self.push('\n');
        Ok(())
    }
}

impl Output for Logger {
    fn log(&mut self, text: &str) -> Result<()> {
        Logger::log(self, text)
    }
}

fn write_metadata(encoder: &Encoder, metadata: &Table, output: &mut impl Output) -> Result<()> {
    output.log(&ansi::header("metadata"))?;
    output.log(&format!("{}\n", encoder.table(metadata, Line::Multi)?))
}

fn write_case(
    encoder: &Encoder,
    kind: NumericKind,
    case: &TestCase,
    output: &mut impl Output,
) -> Result<()> {
    let table = match to_value(case)? {
        Value::Table(table) => table,
        other => {
            return Err(Error::custom(format!(
                "case encoded as {}, not a table",
                other.kind()
            )))
        }
    };
    let comment = encoder.comment(&format!("TEST {}", case.flag().id()));
    output.log(&format!("{}  {comment}", ansi::array_header(kind.section())))?;
    output.log(&format!("{}\n", encoder.table(&table, Line::Multi)?))
}

/// Streams a dialect's fixture to `output` in generation order.
///
/// Text already written stays written if a later case fails.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::{ansi, write_fixture, Dialect, Metadata};
///
/// let mut text = String::new();
/// write_fixture(&Dialect::default(), &Metadata::new("Simple", "c"), &mut text).unwrap();
/// let text = ansi::strip(&text);
/// assert!(text.starts_with("[metadata]\n"));
/// assert!(text.contains("# Simple Cases\n"));
/// assert!(text.contains("[[uints]]  # TEST 0\n"));
/// ```
pub fn write_fixture(dialect: &Dialect, metadata: &Metadata, output: &mut impl Output) -> Result<()> {
    let encoder = Encoder::default();
    let generator = Generator::new(dialect);
    write_metadata(&encoder, &metadata.table(dialect)?, output)?;

    let mut counts = [0usize; 3];
    for area in FeatureArea::SEQUENCE {
        output.log(&format!("{}\n", encoder.comment(area.comment())))?;
        generator.emit(area, &mut |kind, case| {
            counts[kind_index(kind)] += 1;
            write_case(&encoder, kind, &case, output)
        })?;
    }

    info!(
        language = %metadata.language,
        floats = counts[0],
        ints = counts[1],
        uints = counts[2],
        "wrote fixture"
    );
    Ok(())
}

fn kind_index(kind: NumericKind) -> usize {
    match kind {
        NumericKind::Float => 0,
        NumericKind::Int => 1,
        NumericKind::Uint => 2,
    }
}

/// A generated fixture, with cases grouped by kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    metadata: Table,
    floats: Vec<TestCase>,
    ints: Vec<TestCase>,
    uints: Vec<TestCase>,
}

impl Fixture {
    /// Runs every feature area for `dialect`.
    ///
    /// # Errors
    ///
    /// Fails if any case cannot be built; no partial fixture is returned.
    pub fn generate(dialect: &Dialect, metadata: Metadata) -> Result<Self> {
        let mut fixture = Fixture {
            metadata: metadata.table(dialect)?,
            floats: Vec::new(),
            ints: Vec::new(),
            uints: Vec::new(),
        };
        Generator::new(dialect).run(&mut |kind, case| {
            match kind {
                NumericKind::Float => fixture.floats.push(case),
                NumericKind::Int => fixture.ints.push(case),
                NumericKind::Uint => fixture.uints.push(case),
            }
            Ok(())
        })?;

        info!(
            language = %metadata.language,
            floats = fixture.floats.len(),
            ints = fixture.ints.len(),
            uints = fixture.uints.len(),
            "generated fixture"
        );
        Ok(fixture)
    }

    pub fn metadata(&self) -> &Table {
        &self.metadata
    }

    pub fn cases(&self, kind: NumericKind) -> &[TestCase] {
        match kind {
            NumericKind::Float => &self.floats,
            NumericKind::Int => &self.ints,
            NumericKind::Uint => &self.uints,
        }
    }

    /// Total number of cases across all kinds.
    pub fn len(&self) -> usize {
        self.floats.len() + self.ints.len() + self.uints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the console view: metadata, then floats, ints and uints.
    pub fn to_console_string(&self) -> Result<String> {
        let encoder = Encoder::default();
        let mut text = String::new();
        write_metadata(&encoder, &self.metadata, &mut text)?;
        for kind in NumericKind::ALL {
            for case in self.cases(kind) {
                write_case(&encoder, kind, case, &mut text)?;
            }
        }
        Ok(text)
    }

    /// Renders the persisted view: the console view with colours stripped.
    pub fn to_string(&self) -> Result<String> {
        Ok(ansi::strip(&self.to_console_string()?).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flag, Variants};

    #[test]
    fn test_metadata_keys_in_order() {
        let metadata = Metadata::new("C", "c")
            .with_literal(true)
            .with_description(Some("integer literals"));
        let table = metadata.table(&Dialect::default()).unwrap();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "literal", "language", "description", "radix"]);
        assert_eq!(table.get("radix"), Some(&Value::Integer(10)));
        assert_eq!(table.get("literal"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_metadata_without_description() {
        let table = Metadata::new("C", "c").table(&Dialect::default()).unwrap();
        assert!(!table.contains_key("description"));
    }

    #[test]
    fn test_case_block_layout() {
        let case = TestCase::new(Flag::IntegerInternalDigitSeparator, "1_1", "11").unwrap();
        let mut text = String::new();
        write_case(&Encoder::default(), NumericKind::Int, &case, &mut text).unwrap();
        assert_eq!(
            ansi::strip(&text),
            "[[ints]]  # TEST 18\n\
             value = \"1_1\"\n\
             title = \"Integer internal digit separator.\"\n\
             flags = \"I/I\"\n\
             outcome = \"pass\"\n\
             expected = \"11\"\n\n"
        );
    }

    #[test]
    fn test_fixture_groups_cases_by_kind() {
        let fixture = Fixture::generate(&Dialect::default(), Metadata::new("C", "c")).unwrap();
        let text = fixture.to_string().unwrap();
        let first_int = text.find("[[ints]]").unwrap();
        let last_float = text.rfind("[[floats]]").unwrap();
        assert!(last_float < first_int);
        assert_eq!(
            fixture.cases(NumericKind::Float)[0].actual(),
            &Variants::One("19.5".to_string())
        );
    }

    #[test]
    fn test_persisted_view_has_no_escapes() {
        let fixture = Fixture::generate(&Dialect::default(), Metadata::new("C", "c")).unwrap();
        assert!(!fixture.to_string().unwrap().contains('\x1b'));
    }
}
