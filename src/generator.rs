//! The case-matrix generator.
//!
//! A [`Generator`] turns one [`Dialect`] into an ordered stream of
//! [`TestCase`]s, one feature area at a time. Each area is an independent
//! handler: it computes the input token a parser would receive and the
//! canonical decimal the token must decode to, then hands the case to a sink.
//!
//! ## Examples
//!
//! ```rust
//! use numeric_fixtures::{Dialect, FeatureArea, Generator, NumericKind, Variants};
//!
//! let dialect = Dialect::default();
//! let generator = Generator::new(&dialect);
//! let cases = generator.collect(FeatureArea::Simple).unwrap();
//!
//! let (kind, case) = &cases[0];
//! assert_eq!(*kind, NumericKind::Float);
//! assert_eq!(case.actual(), &Variants::One("19.5".into()));
//! assert_eq!(case.expected(), &Variants::One("19.5".into()));
//! ```

use crate::radix::{swap_case, to_digits};
use crate::{
    Composer, Decimal, Dialect, Error, Flag, NumericKind, Result, SignPolicy, TestCase, Variants,
};
use std::fmt;
use tracing::{debug, trace};

/// Receives every case a feature area emits.
pub type Sink<'s> = dyn FnMut(NumericKind, TestCase) -> Result<()> + 's;

/// The closed set of feature-area handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureArea {
    Simple,
    RequiredDigits,
    MantissaSign,
    ExponentComponents,
    LeadingZeros,
    DigitSeparators,
    EmptyDigitSeparators,
    Specials,
    BaseAffixes,
    /// Base prefixes and suffixes combined with digit separators. Reserved.
    BaseDigitSeparators,
}

impl FeatureArea {
    /// The areas a fixture contains, in emission order.
    pub const SEQUENCE: [FeatureArea; 9] = [
        FeatureArea::Simple,
        FeatureArea::RequiredDigits,
        FeatureArea::MantissaSign,
        FeatureArea::ExponentComponents,
        FeatureArea::LeadingZeros,
        FeatureArea::DigitSeparators,
        FeatureArea::EmptyDigitSeparators,
        FeatureArea::Specials,
        FeatureArea::BaseAffixes,
    ];

    /// The comment written above the area's cases.
    #[must_use]
    pub const fn comment(self) -> &'static str {
        match self {
            FeatureArea::Simple => "Simple Cases",
            FeatureArea::RequiredDigits => "Required Digits",
            FeatureArea::MantissaSign => "Mantissa Signs",
            FeatureArea::ExponentComponents => "Exponent Components",
            FeatureArea::LeadingZeros => "Leading Zeros",
            FeatureArea::DigitSeparators => "Digit Separators",
            FeatureArea::EmptyDigitSeparators => "Empty Digit Separators",
            FeatureArea::Specials => "Special Values",
            FeatureArea::BaseAffixes => "Base Prefixes and Suffixes",
            FeatureArea::BaseDigitSeparators => "Base Prefix and Suffix Digit Separators",
        }
    }
}

impl fmt::Display for FeatureArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.comment())
    }
}

/// Variants of `token` with exactly one ASCII letter's case flipped.
///
/// Positions holding no letter are skipped, so every variant differs from
/// `token`.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::generator::case_permutations;
///
/// assert_eq!(case_permutations("NaN").unwrap(), ["naN", "NAN", "Nan"]);
/// assert_eq!(case_permutations("1e").unwrap(), ["1E"]);
/// assert!(case_permutations("ñ").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::NonAscii`] if `token` has a non-ASCII character.
pub fn case_permutations(token: &str) -> Result<Vec<String>> {
    if let Some(ch) = token.chars().find(|ch| !ch.is_ascii()) {
        return Err(Error::NonAscii(ch));
    }

    let mut variants = Vec::new();
    for (index, ch) in token.char_indices() {
        if ch.is_ascii_alphabetic() {
            let mut variant = String::with_capacity(token.len());
            variant.push_str(&token[..index]);
            variant.push(swap_case(ch)?);
            variant.push_str(&token[index + ch.len_utf8()..]);
            variants.push(variant);
        }
    }
    Ok(variants)
}

/// Variants of `token` with `count` separators inserted at one internal
/// position each.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::generator::separator_permutations;
///
/// assert_eq!(separator_permutations("inf", '_', 1), ["i_nf", "in_f"]);
/// assert_eq!(separator_permutations("NaN", '_', 2), ["N__aN", "Na__N"]);
/// assert!(separator_permutations("x", '_', 1).is_empty());
/// ```
pub fn separator_permutations(token: &str, separator: char, count: usize) -> Vec<String> {
    let run = separator.to_string().repeat(count);
    token
        .char_indices()
        .skip(1)
        .map(|(index, _)| format!("{}{run}{}", &token[..index], &token[index..]))
        .collect()
}

/// Emits the cases of each feature area for one dialect.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
    dialect: &'a Dialect,
    composer: Composer<'a>,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(dialect: &'a Dialect) -> Self {
        Generator {
            dialect,
            composer: Composer::new(dialect),
        }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    /// Runs one feature area's handler.
    ///
    /// # Errors
    ///
    /// Fails on the first case that cannot be built, on a sink error, and
    /// with [`Error::NotImplemented`] for [`FeatureArea::BaseDigitSeparators`].
    pub fn emit(&self, area: FeatureArea, sink: &mut Sink<'_>) -> Result<()> {
        let mut count = 0usize;
        let mut counting = |kind: NumericKind, case: TestCase| {
            count += 1;
            sink(kind, case)
        };
        match area {
            FeatureArea::Simple => self.simple(&mut counting)?,
            FeatureArea::RequiredDigits => self.required_digits(&mut counting)?,
            FeatureArea::MantissaSign => self.mantissa_sign(&mut counting)?,
            FeatureArea::ExponentComponents => self.exponent_components(&mut counting)?,
            FeatureArea::LeadingZeros => self.leading_zeros(&mut counting)?,
            FeatureArea::DigitSeparators => self.digit_separators(&mut counting)?,
            FeatureArea::EmptyDigitSeparators => self.empty_digit_separators(&mut counting)?,
            FeatureArea::Specials => self.specials(&mut counting)?,
            FeatureArea::BaseAffixes => self.base_affixes(&mut counting)?,
            FeatureArea::BaseDigitSeparators => self.base_digit_separators(&mut counting)?,
        }
        debug!(area = area.comment(), cases = count, "emitted feature area");
        Ok(())
    }

    /// Runs every area of [`FeatureArea::SEQUENCE`] in order.
    pub fn run(&self, sink: &mut Sink<'_>) -> Result<()> {
        for area in FeatureArea::SEQUENCE {
            self.emit(area, sink)?;
        }
        Ok(())
    }

    /// Collects one area's cases.
    pub fn collect(&self, area: FeatureArea) -> Result<Vec<(NumericKind, TestCase)>> {
        let mut cases = Vec::new();
        self.emit(area, &mut |kind, case| {
            cases.push((kind, case));
            Ok(())
        })?;
        Ok(cases)
    }

    fn enabled(&self, kind: NumericKind) -> bool {
        match kind {
            NumericKind::Float => !self.dialect.no_floats(),
            NumericKind::Int => !self.dialect.no_ints(),
            NumericKind::Uint => !self.dialect.no_uints(),
        }
    }

    fn case(
        &self,
        sink: &mut Sink<'_>,
        kind: NumericKind,
        flag: Flag,
        actual: impl Into<Variants>,
        expected: impl Into<Variants>,
    ) -> Result<()> {
        let case = TestCase::new(flag, actual, expected)?;
        trace!(kind = kind.section(), flag = flag.id(), "case");
        sink(kind, case)
    }

    /// Emits one case whose variants all expect `expected`. Nothing is
    /// emitted when there are no variants.
    fn variants(
        &self,
        sink: &mut Sink<'_>,
        kind: NumericKind,
        flag: Flag,
        actual: Vec<String>,
        expected: &str,
    ) -> Result<()> {
        if actual.is_empty() {
            return Ok(());
        }
        let expected = vec![expected.to_string(); actual.len()];
        self.case(sink, kind, flag, actual, expected)
    }

    fn actual(&self, value: &str) -> Result<String> {
        self.composer.to_actual(value, None, None, None, false)
    }

    fn signed(&self, value: &str, sign: &str) -> Result<String> {
        self.composer.to_actual(value, Some(sign), None, None, false)
    }

    fn decimal(&self, value: Decimal) -> Result<String> {
        self.composer.compose(&value)
    }

    fn int_expected(&self, value: i64) -> Result<String> {
        self.composer.to_int_expected(value, None)
    }

    fn radix(&self) -> u32 {
        self.dialect.mantissa_radix()
    }

    /// Whether leading-separator cases carry a `-` sign.
    fn negative_leading(&self) -> bool {
        self.dialect.base_prefix().is_none() && self.dialect.mantissa_sign() != SignPolicy::None
    }

    /// Flag 0: an ordinary value in the mantissa radix.
    pub fn simple(&self, sink: &mut Sink<'_>) -> Result<()> {
        let radix = self.radix();
        let integer = 2 * radix - 1;
        let fraction = radix / 2;

        if self.enabled(NumericKind::Float) {
            let token = format!(
                "{}{}{}",
                to_digits(i64::from(integer), radix)?,
                self.dialect.decimal_point(),
                to_digits(i64::from(fraction), radix)?
            );
            self.case(
                sink,
                NumericKind::Float,
                Flag::Simple,
                self.actual(&token)?,
                self.decimal(Decimal::new(u64::from(integer), u64::from(fraction), 1))?,
            )?;
        }
        for kind in [NumericKind::Int, NumericKind::Uint] {
            if self.enabled(kind) {
                self.case(
                    sink,
                    kind,
                    Flag::Simple,
                    self.composer.to_int_actual(integer)?,
                    self.int_expected(i64::from(integer))?,
                )?;
            }
        }
        Ok(())
    }

    /// Flags 1-4: components that cannot be empty.
    pub fn required_digits(&self, sink: &mut Sink<'_>) -> Result<()> {
        let dot = self.dialect.decimal_point();
        let exp = self.dialect.exponent_char();

        if self.enabled(NumericKind::Int) {
            self.case(
                sink,
                NumericKind::Int,
                Flag::RequiredIntegerDigits,
                self.actual("")?,
                self.int_expected(1)?,
            )?;
        }
        if self.enabled(NumericKind::Float) {
            let one = self.decimal(Decimal::new(1, 0, 1))?;
            self.case(
                sink,
                NumericKind::Float,
                Flag::RequiredIntegerDigits,
                self.actual(&format!("{dot}1"))?,
                self.decimal(Decimal::new(0, 1, 1))?,
            )?;
            self.case(
                sink,
                NumericKind::Float,
                Flag::RequiredFractionDigits,
                self.actual(&format!("1{dot}"))?,
                one.as_str(),
            )?;
            let tokens = [format!("1{dot}0{exp}"), format!("1{exp}"), format!("1{dot}{exp}")];
            let actual = tokens
                .iter()
                .map(|token| self.actual(token))
                .collect::<Result<Vec<_>>>()?;
            self.variants(sink, NumericKind::Float, Flag::RequiredExponentDigits, actual, &one)?;
            self.case(
                sink,
                NumericKind::Float,
                Flag::RequiredMantissaDigits,
                self.actual(&dot.to_string())?,
                self.decimal(Decimal::new(0, 0, 1))?,
            )?;
        }
        Ok(())
    }

    /// Flags 5-6: explicit and omitted positive mantissa signs.
    pub fn mantissa_sign(&self, sink: &mut Sink<'_>) -> Result<()> {
        if self.enabled(NumericKind::Int) {
            let expected = self.int_expected(1)?;
            self.case(
                sink,
                NumericKind::Int,
                Flag::NoMantissaPositiveSign,
                self.signed("1", "+")?,
                expected.as_str(),
            )?;
            self.case(
                sink,
                NumericKind::Int,
                Flag::RequiredMantissaSign,
                self.signed("1", "")?,
                expected,
            )?;
        }
        if self.enabled(NumericKind::Float) {
            let token = format!("1{}0", self.dialect.decimal_point());
            let expected = self.decimal(Decimal::new(1, 0, 1))?;
            self.case(
                sink,
                NumericKind::Float,
                Flag::NoMantissaPositiveSign,
                self.signed(&token, "+")?,
                expected.as_str(),
            )?;
            self.case(
                sink,
                NumericKind::Float,
                Flag::RequiredMantissaSign,
                self.signed(&token, "")?,
                expected,
            )?;
        }
        Ok(())
    }

    /// Flags 7-13, 16 and 17: exponent syntax. Floats only.
    ///
    /// The exponent is `3` written in the exponent radix; expectations fold
    /// it into the mantissa as a power of the exponent base.
    pub fn exponent_components(&self, sink: &mut Sink<'_>) -> Result<()> {
        if !self.enabled(NumericKind::Float) {
            return Ok(());
        }

        let dot = self.dialect.decimal_point();
        let e = self.dialect.exponent_char();
        let s = self.dialect.exponent_sign().sign(false)?;
        let exp = to_digits(3, self.dialect.exponent_radix())?;
        let cube = self.decimal(Decimal::new(1, 0, 1).exponent(3).no_exponent(true))?;
        let tenth_cube = self.decimal(Decimal::new(0, 1, 1).exponent(3).no_exponent(true))?;
        let zero = self.decimal(Decimal::new(0, 0, 1).exponent(3).no_exponent(true))?;

        let cases = [
            (Flag::NoExponentNotation, format!("1{dot}0{e}{s}{exp}"), &cube),
            (Flag::NoExponentPositiveSign, format!("1{dot}0{e}+{exp}"), &cube),
            (Flag::RequiredExponentSign, format!("1{dot}0{e}{exp}"), &cube),
            (Flag::NoExponentWithoutFraction, format!("1{e}{s}{exp}"), &cube),
            (Flag::RequiredIntegerDigitsWithExponent, format!("1{dot}{e}{s}{exp}"), &cube),
            (Flag::RequiredFractionDigitsWithExponent, format!("{dot}1{e}{s}{exp}"), &tenth_cube),
            (Flag::RequiredMantissaDigitsWithExponent, format!("{dot}{e}{s}{exp}"), &zero),
        ];
        for (flag, token, expected) in cases {
            self.case(sink, NumericKind::Float, flag, self.actual(&token)?, expected.as_str())?;
        }

        let mantissa = format!("{}{dot}1", to_digits(3, self.radix())?);
        self.case(
            sink,
            NumericKind::Float,
            Flag::RequiredExponentNotation,
            self.actual(&mantissa)?,
            self.decimal(Decimal::new(3, 1, 1))?,
        )?;
        self.case(
            sink,
            NumericKind::Float,
            Flag::CaseSensitiveExponent,
            self.actual(&format!("{mantissa}{}{s}{exp}", swap_case(e)?))?,
            self.decimal(Decimal::new(3, 1, 1).exponent(3))?,
        )
    }

    /// Flags 14-15: leading zeros, which some grammars read as octal.
    pub fn leading_zeros(&self, sink: &mut Sink<'_>) -> Result<()> {
        let radix = self.radix();
        for kind in [NumericKind::Int, NumericKind::Uint] {
            if self.enabled(kind) {
                self.case(
                    sink,
                    kind,
                    Flag::NoIntegerLeadingZeros,
                    self.actual("0011")?,
                    self.int_expected(i64::from(radix) + 1)?,
                )?;
            }
        }
        if self.enabled(NumericKind::Float) {
            self.case(
                sink,
                NumericKind::Float,
                Flag::NoFloatLeadingZeros,
                self.actual(&format!("0011{}1", self.dialect.decimal_point()))?,
                self.decimal(Decimal::new(u64::from(radix) + 1, 1, 1))?,
            )?;
        }
        Ok(())
    }

    /// Flags 18-29: separators inside, before, after and doubled within each
    /// component. Skipped when the dialect has no separator.
    pub fn digit_separators(&self, sink: &mut Sink<'_>) -> Result<()> {
        let Some(sep) = self.dialect.digit_separator() else {
            return Ok(());
        };
        let radix = self.radix();
        let eleven = u64::from(radix) + 1;
        let use_neg = self.negative_leading();
        let leading = |token: &str| {
            if use_neg {
                self.signed(token, "-")
            } else {
                self.actual(token)
            }
        };

        if self.enabled(NumericKind::Int) {
            let pos = self.int_expected(i64::from(radix) + 1)?;
            let neg = self
                .composer
                .to_int_expected(-(i64::from(radix) + 1), Some(SignPolicy::Optional))?;
            let lead = if use_neg { &neg } else { &pos };

            let cases = [
                (Flag::IntegerInternalDigitSeparator, self.actual(&format!("1{sep}1"))?, &pos),
                (Flag::IntegerLeadingDigitSeparator, leading(&format!("{sep}11"))?, lead),
                (Flag::IntegerTrailingDigitSeparator, self.actual(&format!("11{sep}"))?, &pos),
                (Flag::IntegerConsecutiveDigitSeparator, self.actual(&format!("1{sep}{sep}1"))?, &pos),
                (Flag::IntegerConsecutiveDigitSeparator, leading(&format!("{sep}{sep}11"))?, lead),
                (Flag::IntegerConsecutiveDigitSeparator, self.actual(&format!("11{sep}{sep}"))?, &pos),
            ];
            for (flag, actual, expected) in cases {
                self.case(sink, NumericKind::Int, flag, actual, expected.as_str())?;
            }
        }

        if self.enabled(NumericKind::Float) {
            let dot = self.dialect.decimal_point();
            let e = self.dialect.exponent_char();
            let s = self.dialect.exponent_sign().sign(false)?;
            let exponent = i64::from(self.dialect.exponent_radix()) + 1;
            let pos = self.decimal(Decimal::new(eleven, eleven, 2))?;
            let neg = self.decimal(Decimal::new(eleven, eleven, 2).mantissa_sign("-"))?;
            let pos_exp = self.decimal(Decimal::new(eleven, eleven, 2).exponent(exponent))?;
            let lead = if use_neg { &neg } else { &pos };

            let cases = [
                (Flag::IntegerInternalDigitSeparator, self.actual(&format!("1{sep}1{dot}11"))?, &pos),
                (Flag::FractionInternalDigitSeparator, self.actual(&format!("11{dot}1{sep}1"))?, &pos),
                (Flag::ExponentInternalDigitSeparator, self.actual(&format!("11{dot}11{e}{s}1{sep}1"))?, &pos_exp),
                (Flag::IntegerLeadingDigitSeparator, leading(&format!("{sep}11{dot}11"))?, lead),
                (Flag::FractionLeadingDigitSeparator, self.actual(&format!("11{dot}{sep}11"))?, &pos),
                (Flag::ExponentLeadingDigitSeparator, self.actual(&format!("11{dot}11{e}{s}{sep}11"))?, &pos_exp),
                (Flag::IntegerTrailingDigitSeparator, self.actual(&format!("11{sep}{dot}11"))?, &pos),
                (Flag::FractionTrailingDigitSeparator, self.actual(&format!("11{dot}11{sep}"))?, &pos),
                (Flag::FractionTrailingDigitSeparator, self.actual(&format!("11{dot}11{sep}{e}{s}11"))?, &pos_exp),
                (Flag::ExponentTrailingDigitSeparator, self.actual(&format!("11{dot}11{e}{s}11{sep}"))?, &pos_exp),
                (Flag::IntegerConsecutiveDigitSeparator, self.actual(&format!("1{sep}{sep}1{dot}11"))?, &pos),
                (Flag::IntegerConsecutiveDigitSeparator, leading(&format!("{sep}{sep}11{dot}11"))?, lead),
                (Flag::IntegerConsecutiveDigitSeparator, self.actual(&format!("11{sep}{sep}{dot}11"))?, &pos),
                (Flag::FractionConsecutiveDigitSeparator, self.actual(&format!("11{dot}1{sep}{sep}1"))?, &pos),
                (Flag::FractionConsecutiveDigitSeparator, self.actual(&format!("11{dot}{sep}{sep}11"))?, &pos),
                (Flag::FractionConsecutiveDigitSeparator, self.actual(&format!("11{dot}11{sep}{sep}"))?, &pos),
                (Flag::FractionConsecutiveDigitSeparator, self.actual(&format!("11{dot}11{sep}{sep}{e}{s}11"))?, &pos_exp),
                (Flag::ExponentConsecutiveDigitSeparator, self.actual(&format!("11{dot}11{e}{s}1{sep}{sep}1"))?, &pos_exp),
                (Flag::ExponentConsecutiveDigitSeparator, self.actual(&format!("11{dot}11{e}{s}{sep}{sep}11"))?, &pos_exp),
                (Flag::ExponentConsecutiveDigitSeparator, self.actual(&format!("11{dot}11{e}{s}11{sep}{sep}"))?, &pos_exp),
            ];
            for (flag, actual, expected) in cases {
                self.case(sink, NumericKind::Float, flag, actual, expected.as_str())?;
            }
        }
        Ok(())
    }

    /// Flags 30-37: separators standing in for an empty component. Skipped
    /// when the dialect has no separator.
    pub fn empty_digit_separators(&self, sink: &mut Sink<'_>) -> Result<()> {
        let Some(sep) = self.dialect.digit_separator() else {
            return Ok(());
        };

        if self.enabled(NumericKind::Int) {
            let zero = self.int_expected(0)?;
            self.case(
                sink,
                NumericKind::Int,
                Flag::EmptyIntegerDigitSeparator,
                self.actual(&sep.to_string())?,
                zero.as_str(),
            )?;
            self.case(
                sink,
                NumericKind::Int,
                Flag::EmptyIntegerConsecutiveDigitSeparator,
                self.actual(&format!("{sep}{sep}"))?,
                zero,
            )?;
        }

        if self.enabled(NumericKind::Float) {
            let dot = self.dialect.decimal_point();
            let e = self.dialect.exponent_char();
            let s = self.dialect.exponent_sign().sign(false)?;
            let zero = self.decimal(Decimal::new(0, 0, 1))?;
            let tenth = self.decimal(Decimal::new(0, 1, 1))?;
            let one = self.decimal(Decimal::new(1, 0, 1))?;
            let one_tenth = self.decimal(Decimal::new(1, 1, 1))?;

            let cases = [
                (Flag::EmptyIntegerDigitSeparator, format!("{sep}"), &zero),
                (Flag::EmptyIntegerDigitSeparator, format!("{sep}{dot}1"), &tenth),
                (Flag::EmptyIntegerConsecutiveDigitSeparator, format!("{sep}{sep}"), &zero),
                (Flag::EmptyIntegerConsecutiveDigitSeparator, format!("{sep}{sep}{dot}1"), &tenth),
                (Flag::EmptyFractionDigitSeparator, format!("1{dot}{sep}"), &one),
                (Flag::EmptyFractionConsecutiveDigitSeparator, format!("1{dot}{sep}{sep}"), &one),
                (Flag::EmptyMantissaDigitSeparator, format!("{sep}{dot}{sep}"), &zero),
                (Flag::EmptyMantissaConsecutiveDigitSeparator, format!("{sep}{sep}{dot}{sep}{sep}"), &zero),
                (Flag::EmptyExponentDigitSeparator, format!("1{dot}1{e}{s}{sep}"), &one_tenth),
                (Flag::EmptyExponentConsecutiveDigitSeparator, format!("1{dot}1{e}{s}{sep}{sep}"), &one_tenth),
            ];
            for (flag, token, expected) in cases {
                self.case(sink, NumericKind::Float, flag, self.actual(&token)?, expected.as_str())?;
            }
        }
        Ok(())
    }

    /// Flags 38-53: NaN and infinity spellings. Floats only.
    ///
    /// Specials never take base affixes, so tokens are the bare spellings.
    pub fn specials(&self, sink: &mut Sink<'_>) -> Result<()> {
        if !self.enabled(NumericKind::Float) {
            return Ok(());
        }
        let float = NumericKind::Float;
        let d = self.dialect;

        self.case(sink, float, Flag::NoSpecial, d.nan_string(), d.nan_expr())?;
        self.variants(
            sink,
            float,
            Flag::CaseSensitiveSpecial,
            case_permutations(d.nan_string())?,
            d.nan_expr(),
        )?;

        let spellings = [
            (d.nan_string(), d.nan_expr()),
            (d.inf_string(), d.inf_expr()),
            (d.infinity_string(), d.infinity_expr()),
        ];
        if let Some(sep) = d.digit_separator() {
            for (spelling, expr) in spellings {
                let single = separator_permutations(spelling, sep, 1);
                self.variants(sink, float, Flag::SpecialDigitSeparator, single, expr)?;
                let double = separator_permutations(spelling, sep, 2);
                self.variants(sink, float, Flag::SpecialConsecutiveDigitSeparator, double, expr)?;
            }
        }

        // NaN has no signed canonical form, so its negation expects NaN
        let groups = [
            (
                [Flag::HasNan, Flag::PositiveNan, Flag::NegativeNan, Flag::CaseSensitiveNan],
                d.nan_string(),
                d.nan_expr(),
                d.nan_expr().to_string(),
            ),
            (
                [Flag::HasInf, Flag::PositiveInf, Flag::NegativeInf, Flag::CaseSensitiveInf],
                d.inf_string(),
                d.inf_expr(),
                format!("-{}", d.inf_expr()),
            ),
            (
                [
                    Flag::HasInfinity,
                    Flag::PositiveInfinity,
                    Flag::NegativeInfinity,
                    Flag::CaseSensitiveInfinity,
                ],
                d.infinity_string(),
                d.infinity_expr(),
                format!("-{}", d.infinity_expr()),
            ),
        ];
        for ([has, positive, negative, case_sensitive], spelling, expr, negated) in groups {
            self.case(sink, float, has, spelling, expr)?;
            self.case(sink, float, positive, format!("+{spelling}"), expr)?;
            self.case(sink, float, negative, format!("-{spelling}"), negated)?;
            self.variants(sink, float, case_sensitive, case_permutations(spelling)?, expr)?;
        }
        Ok(())
    }

    /// Flags 54-61: base prefixes and suffixes.
    ///
    /// A block is emitted for each configured affix, or for both when
    /// neither is configured, in which case `0d` and `d` stand in.
    pub fn base_affixes(&self, sink: &mut Sink<'_>) -> Result<()> {
        let d = self.dialect;
        let prefix = Some(d.prefix_text()).filter(|p| !p.is_empty()).unwrap_or_else(|| "0d".into());
        let suffix = Some(d.suffix_text()).filter(|s| !s.is_empty()).unwrap_or_else(|| "d".into());
        let prefix_char = d.base_prefix().unwrap_or('d');
        let suffix_char = d.base_suffix().unwrap_or('d');
        let swapped_prefix = swap_case(prefix_char)?;
        let swapped_suffix = swap_case(suffix_char)?;
        let with_prefix = d.base_prefix().is_some() || d.base_suffix().is_none();
        let with_suffix = d.base_suffix().is_some() || d.base_prefix().is_none();

        let radix = self.radix();
        let eleven = u64::from(radix) + 1;
        let float_body = format!("11{}11", d.decimal_point());

        for kind in [NumericKind::Int, NumericKind::Uint, NumericKind::Float] {
            if !self.enabled(kind) {
                continue;
            }
            let (body, expected) = match kind {
                NumericKind::Float => (
                    float_body.as_str(),
                    self.decimal(Decimal::new(eleven, eleven, 2))?,
                ),
                _ => ("11", self.int_expected(i64::from(radix) + 1)?),
            };
            let with = |prefix: Option<&str>, suffix: Option<&str>| {
                self.composer.to_actual(body, None, prefix, suffix, false)
            };

            if with_prefix {
                let mut cases = vec![
                    (Flag::SupportsBasePrefix, with(Some(prefix.as_str()), None)?),
                    (Flag::NoBasePrefix, with(Some(prefix.as_str()), None)?),
                ];
                if swapped_prefix != prefix_char {
                    let swapped = format!("0{swapped_prefix}");
                    cases.push((Flag::CaseSensitiveBasePrefix, with(Some(swapped.as_str()), None)?));
                }
                cases.push((Flag::RequiredBasePrefix, with(Some(""), None)?));
                for (flag, actual) in cases {
                    self.case(sink, kind, flag, actual, expected.as_str())?;
                }
            }
            if with_suffix {
                let mut cases = vec![
                    (Flag::SupportsBaseSuffix, with(None, Some(suffix.as_str()))?),
                    (Flag::NoBaseSuffix, with(None, Some(suffix.as_str()))?),
                ];
                if swapped_suffix != suffix_char {
                    let swapped = swapped_suffix.to_string();
                    cases.push((Flag::CaseSensitiveBaseSuffix, with(None, Some(swapped.as_str()))?));
                }
                cases.push((Flag::RequiredBaseSuffix, with(None, Some(""))?));
                for (flag, actual) in cases {
                    self.case(sink, kind, flag, actual, expected.as_str())?;
                }
            }
        }
        Ok(())
    }

    /// Base prefixes and suffixes combined with digit separators.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::NotImplemented`].
    pub fn base_digit_separators(&self, _sink: &mut Sink<'_>) -> Result<()> {
        Err(Error::not_implemented(
            "cases combining base prefixes or suffixes with digit separators",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    fn one(case: &TestCase) -> (&str, &str) {
        match (case.actual(), case.expected()) {
            (Variants::One(actual), Variants::One(expected)) => (actual.as_str(), expected.as_str()),
            other => panic!("expected single variants, got {other:?}"),
        }
    }

    fn find(cases: &[(NumericKind, TestCase)], kind: NumericKind, flag: Flag) -> &TestCase {
        cases
            .iter()
            .find(|(k, case)| *k == kind && case.flag() == flag)
            .map(|(_, case)| case)
            .unwrap_or_else(|| panic!("no {kind} case for {flag:?}"))
    }

    #[test]
    fn test_case_permutations_skip_non_letters() {
        assert_eq!(case_permutations("+inf").unwrap(), ["+Inf", "+iNf", "+inF"]);
        assert!(case_permutations("123").unwrap().is_empty());
    }

    #[test]
    fn test_case_permutations_reject_non_ascii() {
        assert!(matches!(case_permutations("Nañ"), Err(Error::NonAscii('ñ'))));
    }

    #[test]
    fn test_separator_permutations_are_internal() {
        let variants = separator_permutations("Infinity", '_', 1);
        assert_eq!(variants.len(), 7);
        for variant in &variants {
            assert!(!variant.starts_with('_') && !variant.ends_with('_'));
        }
    }

    #[test]
    fn test_simple_in_binary() {
        let dialect = Dialect::builder().with_mantissa_radix(2).build().unwrap();
        let cases = Generator::new(&dialect).collect(FeatureArea::Simple).unwrap();
        assert_eq!(one(find(&cases, NumericKind::Float, Flag::Simple)), ("11.1", "3.5"));
        assert_eq!(one(find(&cases, NumericKind::Int, Flag::Simple)), ("11", "3"));
        assert_eq!(one(find(&cases, NumericKind::Uint, Flag::Simple)), ("11", "3"));
    }

    #[test]
    fn test_exponent_expectations_are_folded() {
        let dialect = Dialect::default();
        let cases = Generator::new(&dialect)
            .collect(FeatureArea::ExponentComponents)
            .unwrap();
        assert!(cases.iter().all(|(kind, _)| *kind == NumericKind::Float));
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::NoExponentNotation)),
            ("1.0e3", "1000.0")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::RequiredFractionDigitsWithExponent)),
            (".1e3", "100.0")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::RequiredMantissaDigitsWithExponent)),
            (".e3", "0.0")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::CaseSensitiveExponent)),
            ("3.1E3", "3.1e3")
        );
    }

    #[test]
    fn test_exponent_base_differs_from_radix() {
        let dialect = Dialect::builder()
            .with_mantissa_radix(16)
            .with_exponent_base(Some(2))
            .with_exponent_radix(Some(10))
            .with_exponent_char('p')
            .build()
            .unwrap();
        let cases = Generator::new(&dialect)
            .collect(FeatureArea::ExponentComponents)
            .unwrap();
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::NoExponentNotation)),
            ("1.0p3", "8.0")
        );
        // 0x.1p3 is 8/16
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::RequiredFractionDigitsWithExponent)),
            (".1p3", "0.5")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::CaseSensitiveExponent)),
            ("3.1P3", "24.5")
        );

        let cases = Generator::new(&dialect)
            .collect(FeatureArea::DigitSeparators)
            .unwrap();
        // 0x11.11 is 17 + 17/256, scaled by 2^11
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::ExponentInternalDigitSeparator)),
            ("11.11p1_1", "34952.0")
        );
    }

    #[test]
    fn test_binary_exponents_expect_folded_values() {
        let dialect = Dialect::builder().with_mantissa_radix(2).build().unwrap();
        let generator = Generator::new(&dialect);

        let cases = generator.collect(FeatureArea::ExponentComponents).unwrap();
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::NoExponentNotation)),
            ("1.0e11", "8.0")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::CaseSensitiveExponent)),
            ("11.1E11", "28.0")
        );

        let cases = generator.collect(FeatureArea::DigitSeparators).unwrap();
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::ExponentInternalDigitSeparator)),
            ("11.11e1_1", "30.0")
        );
        let expected: Vec<&str> = cases
            .iter()
            .filter(|(kind, _)| *kind == NumericKind::Float)
            .flat_map(|(_, case)| case.expected().iter().map(String::as_str))
            .collect();
        assert!(expected.iter().all(|value| !value.contains('e')));
    }

    #[test]
    fn test_leading_separator_uses_negative_sign() {
        let dialect = Dialect::default();
        let cases = Generator::new(&dialect)
            .collect(FeatureArea::DigitSeparators)
            .unwrap();
        assert_eq!(
            one(find(&cases, NumericKind::Int, Flag::IntegerLeadingDigitSeparator)),
            ("-_11", "-11")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::IntegerTrailingDigitSeparator)),
            ("11_.11", "11.11")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::ExponentInternalDigitSeparator)),
            ("11.11e1_1", "11.11e11")
        );
    }

    #[test]
    fn test_leading_separator_stays_positive_with_prefix() {
        let dialect = Dialect::builder().with_base_prefix(Some('x')).build().unwrap();
        let cases = Generator::new(&dialect)
            .collect(FeatureArea::DigitSeparators)
            .unwrap();
        assert_eq!(
            one(find(&cases, NumericKind::Int, Flag::IntegerLeadingDigitSeparator)),
            ("0x_11", "11")
        );
    }

    #[test]
    fn test_no_separator_skips_separator_areas() {
        let dialect = Dialect::builder().with_digit_separator(None).build().unwrap();
        let generator = Generator::new(&dialect);
        assert!(generator.collect(FeatureArea::DigitSeparators).unwrap().is_empty());
        assert!(generator
            .collect(FeatureArea::EmptyDigitSeparators)
            .unwrap()
            .is_empty());
        let specials = generator.collect(FeatureArea::Specials).unwrap();
        assert!(specials
            .iter()
            .all(|(_, case)| case.flag() != Flag::SpecialDigitSeparator));
    }

    #[test]
    fn test_special_expectations() {
        let dialect = Dialect::builder()
            .with_inf_expr(Some("f64::INFINITY"))
            .build()
            .unwrap();
        let cases = Generator::new(&dialect).collect(FeatureArea::Specials).unwrap();
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::NegativeNan)),
            ("-NaN", "NaN")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::NegativeInf)),
            ("-inf", "-f64::INFINITY")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::PositiveInfinity)),
            ("+Infinity", "Infinity")
        );
        let case = find(&cases, NumericKind::Float, Flag::CaseSensitiveInfinity);
        assert_eq!(case.actual().len(), 8);
        assert_eq!(case.title(), "Has a case-sensitive representation of long infinity.");
    }

    #[test]
    fn test_base_affixes_without_configuration() {
        let dialect = Dialect::default();
        let cases = Generator::new(&dialect).collect(FeatureArea::BaseAffixes).unwrap();
        // both blocks of four, for ints, uints and floats
        assert_eq!(cases.len(), 24);
        assert_eq!(
            one(find(&cases, NumericKind::Int, Flag::CaseSensitiveBasePrefix)),
            ("0D11", "11")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Float, Flag::SupportsBaseSuffix)),
            ("11.11d", "11.11")
        );
    }

    #[test]
    fn test_base_affixes_follow_configured_prefix() {
        let dialect = Dialect::builder().with_base_prefix(Some('x')).build().unwrap();
        let cases = Generator::new(&dialect).collect(FeatureArea::BaseAffixes).unwrap();
        assert!(cases.iter().all(|(_, case)| case.flag().id() <= 57));
        assert_eq!(
            one(find(&cases, NumericKind::Uint, Flag::RequiredBasePrefix)),
            ("11", "11")
        );
        assert_eq!(
            one(find(&cases, NumericKind::Int, Flag::NoBasePrefix)).1,
            "11"
        );
    }

    #[test]
    fn test_caseless_affix_has_no_case_sensitive_case() {
        let dialect = Dialect::builder().with_base_suffix(Some('#')).build().unwrap();
        let cases = Generator::new(&dialect).collect(FeatureArea::BaseAffixes).unwrap();
        assert!(cases
            .iter()
            .all(|(_, case)| case.flag() != Flag::CaseSensitiveBaseSuffix));
        assert_eq!(cases.len(), 9);
    }

    #[test]
    fn test_disabled_kinds_are_skipped() {
        let dialect = Dialect::builder()
            .with_no_floats(true)
            .with_no_uints(true)
            .build()
            .unwrap();
        let generator = Generator::new(&dialect);
        let mut kinds = Vec::new();
        generator
            .run(&mut |kind, _| {
                kinds.push(kind);
                Ok(())
            })
            .unwrap();
        assert!(!kinds.is_empty());
        assert!(kinds.iter().all(|kind| *kind == NumericKind::Int));
    }

    #[test]
    fn test_base_digit_separators_are_reserved() {
        let dialect = Dialect::default();
        let err = Generator::new(&dialect)
            .collect(FeatureArea::BaseDigitSeparators)
            .unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
    }

    #[test]
    fn test_sink_errors_stop_generation() {
        let dialect = Dialect::default();
        let mut seen = 0;
        let err = Generator::new(&dialect)
            .run(&mut |_, _| {
                seen += 1;
                Err(Error::custom("sink closed"))
            })
            .unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_leading_zero_cases_assert() {
        let dialect = Dialect::default();
        let cases = Generator::new(&dialect).collect(FeatureArea::LeadingZeros).unwrap();
        assert_eq!(cases.len(), 3);
        assert!(cases
            .iter()
            .all(|(_, case)| case.flag().outcome() == Outcome::Assert));
    }
}
