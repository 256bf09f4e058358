//! Numeric grammar dialects.
//!
//! A [`Dialect`] describes one language's or format's numeric grammar:
//! radixes, punctuation, sign rules, base affixes and special-value spellings.
//! It is built once per generation run with a [`DialectBuilder`] and is
//! read-only afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use numeric_fixtures::{Dialect, SignPolicy};
//!
//! // Rust literals: `_` separators, no positive sign, no NaN literal
//! let dialect = Dialect::builder()
//!     .with_mantissa_sign(SignPolicy::NoPositive)
//!     .with_nan_expr(Some("f64::NAN"))
//!     .with_no_exponent(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(dialect.mantissa_radix(), 10);
//! assert_eq!(dialect.exponent_base(), 10);
//! assert_eq!(dialect.nan_expr(), "f64::NAN");
//! ```

use crate::radix::check_radix;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// How a sign is rendered in front of a magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SignPolicy {
    /// Signs are never written; negative magnitudes are a configuration error.
    None,
    /// `-` for negatives, nothing for positives.
    #[default]
    Optional,
    /// `-` for negatives, and `+` is not accepted by the grammar.
    ///
    /// Renders exactly like [`SignPolicy::Optional`]; the grammars differ
    /// only in what they reject.
    NoPositive,
    /// A sign is always written.
    Required,
}

impl SignPolicy {
    /// Renders the sign for a magnitude.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::SignPolicy;
    ///
    /// assert_eq!(SignPolicy::Optional.sign(false).unwrap(), "");
    /// assert_eq!(SignPolicy::Required.sign(false).unwrap(), "+");
    /// assert_eq!(SignPolicy::NoPositive.sign(true).unwrap(), "-");
    /// assert!(SignPolicy::None.sign(true).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::SignPolicy`] for a negative magnitude under
    /// [`SignPolicy::None`].
    pub fn sign(self, is_negative: bool) -> Result<&'static str> {
        match self {
            SignPolicy::None if is_negative => Err(Error::sign_policy(
                "cannot render a negative value when signs are not allowed",
            )),
            SignPolicy::None => Ok(""),
            SignPolicy::Optional | SignPolicy::NoPositive => {
                Ok(if is_negative { "-" } else { "" })
            }
            SignPolicy::Required => Ok(if is_negative { "-" } else { "+" }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SignPolicy::None => "none",
            SignPolicy::Optional => "optional",
            SignPolicy::NoPositive => "no-positive",
            SignPolicy::Required => "required",
        }
    }
}

impl fmt::Display for SignPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(SignPolicy::None),
            "optional" => Ok(SignPolicy::Optional),
            "no-positive" => Ok(SignPolicy::NoPositive),
            "required" => Ok(SignPolicy::Required),
            other => Err(Error::invalid_dialect(&format!(
                "unknown sign policy \"{other}\""
            ))),
        }
    }
}

/// A validated numeric grammar.
#[derive(Clone, Debug, PartialEq)]
pub struct Dialect {
    mantissa_radix: u32,
    exponent_base: u32,
    exponent_radix: u32,
    decimal_point: char,
    exponent_char: char,
    digit_separator: Option<char>,
    base_prefix: Option<char>,
    base_suffix: Option<char>,
    mantissa_sign: SignPolicy,
    exponent_sign: SignPolicy,
    nan_string: String,
    nan_expr: Option<String>,
    inf_string: String,
    inf_expr: Option<String>,
    infinity_string: String,
    infinity_expr: Option<String>,
    no_exponent: bool,
    no_floats: bool,
    no_ints: bool,
    no_uints: bool,
}

impl Dialect {
    #[must_use]
    pub fn builder() -> DialectBuilder {
        DialectBuilder::default()
    }

    pub fn mantissa_radix(&self) -> u32 {
        self.mantissa_radix
    }

    pub fn exponent_base(&self) -> u32 {
        self.exponent_base
    }

    pub fn exponent_radix(&self) -> u32 {
        self.exponent_radix
    }

    /// Whether a single `radix` describes the mantissa radix, exponent base
    /// and exponent radix alike.
    pub fn has_uniform_radix(&self) -> bool {
        self.mantissa_radix == self.exponent_base && self.mantissa_radix == self.exponent_radix
    }

    pub fn decimal_point(&self) -> char {
        self.decimal_point
    }

    pub fn exponent_char(&self) -> char {
        self.exponent_char
    }

    pub fn digit_separator(&self) -> Option<char> {
        self.digit_separator
    }

    pub fn base_prefix(&self) -> Option<char> {
        self.base_prefix
    }

    pub fn base_suffix(&self) -> Option<char> {
        self.base_suffix
    }

    /// The prefix as written before digits (`0x` for `x`), or `""`.
    pub fn prefix_text(&self) -> String {
        self.base_prefix.map(|c| format!("0{c}")).unwrap_or_default()
    }

    /// The suffix as written after digits, or `""`.
    pub fn suffix_text(&self) -> String {
        self.base_suffix.map(String::from).unwrap_or_default()
    }

    pub fn mantissa_sign(&self) -> SignPolicy {
        self.mantissa_sign
    }

    pub fn exponent_sign(&self) -> SignPolicy {
        self.exponent_sign
    }

    pub fn nan_string(&self) -> &str {
        &self.nan_string
    }

    /// The expression a NaN spelling is compared against: the override if
    /// set, otherwise the spelling itself.
    pub fn nan_expr(&self) -> &str {
        self.nan_expr.as_deref().unwrap_or(&self.nan_string)
    }

    pub fn inf_string(&self) -> &str {
        &self.inf_string
    }

    pub fn inf_expr(&self) -> &str {
        self.inf_expr.as_deref().unwrap_or(&self.inf_string)
    }

    pub fn infinity_string(&self) -> &str {
        &self.infinity_string
    }

    pub fn infinity_expr(&self) -> &str {
        self.infinity_expr.as_deref().unwrap_or(&self.infinity_string)
    }

    /// Expectations are folded to plain decimals with no exponent.
    pub fn no_exponent(&self) -> bool {
        self.no_exponent
    }

    pub fn no_floats(&self) -> bool {
        self.no_floats
    }

    pub fn no_ints(&self) -> bool {
        self.no_ints
    }

    pub fn no_uints(&self) -> bool {
        self.no_uints
    }
}

impl Default for Dialect {
    fn default() -> Self {
        let builder = DialectBuilder::default();
        Dialect {
            mantissa_radix: builder.mantissa_radix,
            exponent_base: builder.mantissa_radix,
            exponent_radix: builder.mantissa_radix,
            decimal_point: builder.decimal_point,
            exponent_char: builder.exponent_char,
            digit_separator: builder.digit_separator,
            base_prefix: None,
            base_suffix: None,
            mantissa_sign: builder.mantissa_sign,
            exponent_sign: builder.exponent_sign,
            nan_string: builder.nan_string,
            nan_expr: None,
            inf_string: builder.inf_string,
            inf_expr: None,
            infinity_string: builder.infinity_string,
            infinity_expr: None,
            no_exponent: false,
            no_floats: false,
            no_ints: false,
            no_uints: false,
        }
    }
}

/// Builder for [`Dialect`].
///
/// Defaults: radix 10, `.` decimal point, `e` exponent, `_` separator, no base
/// affixes, optional signs, and `NaN`/`inf`/`Infinity` spellings. The exponent
/// base and exponent radix follow the mantissa radix unless set.
#[derive(Clone, Debug)]
pub struct DialectBuilder {
    mantissa_radix: u32,
    exponent_base: Option<u32>,
    exponent_radix: Option<u32>,
    decimal_point: char,
    exponent_char: char,
    digit_separator: Option<char>,
    base_prefix: Option<char>,
    base_suffix: Option<char>,
    mantissa_sign: SignPolicy,
    exponent_sign: SignPolicy,
    nan_string: String,
    nan_expr: Option<String>,
    inf_string: String,
    inf_expr: Option<String>,
    infinity_string: String,
    infinity_expr: Option<String>,
    no_exponent: bool,
    no_floats: bool,
    no_ints: bool,
    no_uints: bool,
}

impl Default for DialectBuilder {
    fn default() -> Self {
        DialectBuilder {
            mantissa_radix: 10,
            exponent_base: None,
            exponent_radix: None,
            decimal_point: '.',
            exponent_char: 'e',
            digit_separator: Some('_'),
            base_prefix: None,
            base_suffix: None,
            mantissa_sign: SignPolicy::Optional,
            exponent_sign: SignPolicy::Optional,
            nan_string: "NaN".to_string(),
            nan_expr: None,
            inf_string: "inf".to_string(),
            inf_expr: None,
            infinity_string: "Infinity".to_string(),
            infinity_expr: None,
            no_exponent: false,
            no_floats: false,
            no_ints: false,
            no_uints: false,
        }
    }
}

impl DialectBuilder {
    #[must_use]
    pub fn with_mantissa_radix(mut self, radix: u32) -> Self {
        self.mantissa_radix = radix;
        self
    }

    #[must_use]
    pub fn with_exponent_base(mut self, base: Option<u32>) -> Self {
        self.exponent_base = base;
        self
    }

    #[must_use]
    pub fn with_exponent_radix(mut self, radix: Option<u32>) -> Self {
        self.exponent_radix = radix;
        self
    }

    #[must_use]
    pub fn with_decimal_point(mut self, ch: char) -> Self {
        self.decimal_point = ch;
        self
    }

    #[must_use]
    pub fn with_exponent_char(mut self, ch: char) -> Self {
        self.exponent_char = ch;
        self
    }

    #[must_use]
    pub fn with_digit_separator(mut self, ch: Option<char>) -> Self {
        self.digit_separator = ch;
        self
    }

    /// Sets the base prefix character, written after a `0` (`x` gives `0x`).
    #[must_use]
    pub fn with_base_prefix(mut self, ch: Option<char>) -> Self {
        self.base_prefix = ch;
        self
    }

    #[must_use]
    pub fn with_base_suffix(mut self, ch: Option<char>) -> Self {
        self.base_suffix = ch;
        self
    }

    #[must_use]
    pub fn with_mantissa_sign(mut self, sign: SignPolicy) -> Self {
        self.mantissa_sign = sign;
        self
    }

    #[must_use]
    pub fn with_exponent_sign(mut self, sign: SignPolicy) -> Self {
        self.exponent_sign = sign;
        self
    }

    #[must_use]
    pub fn with_nan_string(mut self, spelling: impl Into<String>) -> Self {
        self.nan_string = spelling.into();
        self
    }

    #[must_use]
    pub fn with_nan_expr(mut self, expr: Option<impl Into<String>>) -> Self {
        self.nan_expr = expr.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_inf_string(mut self, spelling: impl Into<String>) -> Self {
        self.inf_string = spelling.into();
        self
    }

    #[must_use]
    pub fn with_inf_expr(mut self, expr: Option<impl Into<String>>) -> Self {
        self.inf_expr = expr.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_infinity_string(mut self, spelling: impl Into<String>) -> Self {
        self.infinity_string = spelling.into();
        self
    }

    #[must_use]
    pub fn with_infinity_expr(mut self, expr: Option<impl Into<String>>) -> Self {
        self.infinity_expr = expr.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_no_exponent(mut self, no_exponent: bool) -> Self {
        self.no_exponent = no_exponent;
        self
    }

    #[must_use]
    pub fn with_no_floats(mut self, no_floats: bool) -> Self {
        self.no_floats = no_floats;
        self
    }

    #[must_use]
    pub fn with_no_ints(mut self, no_ints: bool) -> Self {
        self.no_ints = no_ints;
        self
    }

    #[must_use]
    pub fn with_no_uints(mut self, no_uints: bool) -> Self {
        self.no_uints = no_uints;
        self
    }

    /// Validates the configuration and resolves defaulted radixes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`] when a radix is outside `2..=36` or
    /// when the digit separator, base prefix or base suffix is not ASCII.
    pub fn build(self) -> Result<Dialect> {
        let exponent_base = self.exponent_base.unwrap_or(self.mantissa_radix);
        let exponent_radix = self.exponent_radix.unwrap_or(self.mantissa_radix);
        check_radix(self.mantissa_radix)?;
        check_radix(exponent_base)?;
        check_radix(exponent_radix)?;

        for (name, ch) in [
            ("digit separator", self.digit_separator),
            ("base prefix", self.base_prefix),
            ("base suffix", self.base_suffix),
        ] {
            if let Some(ch) = ch.filter(|ch| !ch.is_ascii()) {
                return Err(Error::invalid_dialect(&format!(
                    "{name} {ch:?} must be in the ASCII plane"
                )));
            }
        }

        Ok(Dialect {
            mantissa_radix: self.mantissa_radix,
            exponent_base,
            exponent_radix,
            decimal_point: self.decimal_point,
            exponent_char: self.exponent_char,
            digit_separator: self.digit_separator,
            base_prefix: self.base_prefix,
            base_suffix: self.base_suffix,
            mantissa_sign: self.mantissa_sign,
            exponent_sign: self.exponent_sign,
            nan_string: self.nan_string,
            nan_expr: self.nan_expr,
            inf_string: self.inf_string,
            inf_expr: self.inf_expr,
            infinity_string: self.infinity_string,
            infinity_expr: self.infinity_expr,
            no_exponent: self.no_exponent,
            no_floats: self.no_floats,
            no_ints: self.no_ints,
            no_uints: self.no_uints,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_and_no_positive_render_alike() {
        for negative in [false, true] {
            assert_eq!(
                SignPolicy::Optional.sign(negative).unwrap(),
                SignPolicy::NoPositive.sign(negative).unwrap()
            );
        }
    }

    #[test]
    fn test_none_forbids_negatives_only() {
        assert_eq!(SignPolicy::None.sign(false).unwrap(), "");
        assert!(matches!(
            SignPolicy::None.sign(true),
            Err(Error::SignPolicy(_))
        ));
    }

    #[test]
    fn test_sign_policy_names_round_trip() {
        for policy in [
            SignPolicy::None,
            SignPolicy::Optional,
            SignPolicy::NoPositive,
            SignPolicy::Required,
        ] {
            assert_eq!(policy.as_str().parse::<SignPolicy>().unwrap(), policy);
        }
        assert!("sometimes".parse::<SignPolicy>().is_err());
    }

    #[test]
    fn test_exponent_radixes_default_to_mantissa_radix() {
        let dialect = Dialect::builder().with_mantissa_radix(2).build().unwrap();
        assert_eq!(dialect.exponent_base(), 2);
        assert_eq!(dialect.exponent_radix(), 2);
        assert!(dialect.has_uniform_radix());

        let dialect = Dialect::builder()
            .with_mantissa_radix(16)
            .with_exponent_base(Some(2))
            .with_exponent_radix(Some(10))
            .build()
            .unwrap();
        assert!(!dialect.has_uniform_radix());
    }

    #[test]
    fn test_default_matches_default_builder() {
        assert_eq!(Dialect::default(), Dialect::builder().build().unwrap());
    }

    #[test]
    fn test_rejects_non_ascii_affixes() {
        let err = Dialect::builder()
            .with_base_prefix(Some('ẋ'))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDialect(_)));

        let err = Dialect::builder()
            .with_base_suffix(Some('ĥ'))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDialect(_)));
    }

    #[test]
    fn test_rejects_out_of_range_radix() {
        assert!(Dialect::builder().with_mantissa_radix(1).build().is_err());
        assert!(Dialect::builder()
            .with_exponent_base(Some(64))
            .build()
            .is_err());
    }

    #[test]
    fn test_affix_text() {
        let dialect = Dialect::builder()
            .with_base_prefix(Some('x'))
            .with_base_suffix(Some('h'))
            .build()
            .unwrap();
        assert_eq!(dialect.prefix_text(), "0x");
        assert_eq!(dialect.suffix_text(), "h");
        assert_eq!(Dialect::default().prefix_text(), "");
    }

    #[test]
    fn test_special_expressions_fall_back_to_spellings() {
        let dialect = Dialect::builder()
            .with_inf_expr(Some("f64::INFINITY"))
            .build()
            .unwrap();
        assert_eq!(dialect.nan_expr(), "NaN");
        assert_eq!(dialect.inf_expr(), "f64::INFINITY");
        assert_eq!(dialect.infinity_expr(), "Infinity");
    }
}
