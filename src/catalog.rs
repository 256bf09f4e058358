//! The registry of grammar-rule variants.
//!
//! Every case the generator emits references exactly one [`Flag`]. The flag's
//! descriptor carries the title, short code and expected outcome, so the
//! emission code only deals with values. Ids are stable across dialects:
//! downstream reports aggregate by id, never by position.

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// How a parser is expected to treat a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The input parses to the expected value.
    Pass,
    /// The input is rejected.
    Fail,
    /// The input parses, but to a different value than expected.
    Assert,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
            Outcome::Assert => "assert",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one grammar-rule variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagDescriptor {
    pub id: u16,
    pub title: &'static str,
    /// Compact mnemonic shown in reports.
    pub short_code: &'static str,
    pub outcome: Outcome,
}

const fn entry(
    id: u16,
    title: &'static str,
    short_code: &'static str,
    outcome: Outcome,
) -> FlagDescriptor {
    FlagDescriptor {
        id,
        title,
        short_code,
        outcome,
    }
}

/// A grammar-rule variant. The discriminant is the catalog id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Flag {
    Simple = 0,
    RequiredIntegerDigits = 1,
    RequiredFractionDigits = 2,
    RequiredExponentDigits = 3,
    RequiredMantissaDigits = 4,
    NoMantissaPositiveSign = 5,
    RequiredMantissaSign = 6,
    NoExponentNotation = 7,
    NoExponentPositiveSign = 8,
    RequiredExponentSign = 9,
    NoExponentWithoutFraction = 10,
    RequiredIntegerDigitsWithExponent = 11,
    RequiredFractionDigitsWithExponent = 12,
    RequiredMantissaDigitsWithExponent = 13,
    NoIntegerLeadingZeros = 14,
    NoFloatLeadingZeros = 15,
    RequiredExponentNotation = 16,
    CaseSensitiveExponent = 17,
    IntegerInternalDigitSeparator = 18,
    FractionInternalDigitSeparator = 19,
    ExponentInternalDigitSeparator = 20,
    IntegerLeadingDigitSeparator = 21,
    FractionLeadingDigitSeparator = 22,
    ExponentLeadingDigitSeparator = 23,
    IntegerTrailingDigitSeparator = 24,
    FractionTrailingDigitSeparator = 25,
    ExponentTrailingDigitSeparator = 26,
    IntegerConsecutiveDigitSeparator = 27,
    FractionConsecutiveDigitSeparator = 28,
    ExponentConsecutiveDigitSeparator = 29,
    EmptyIntegerDigitSeparator = 30,
    EmptyIntegerConsecutiveDigitSeparator = 31,
    EmptyFractionDigitSeparator = 32,
    EmptyFractionConsecutiveDigitSeparator = 33,
    EmptyMantissaDigitSeparator = 34,
    EmptyMantissaConsecutiveDigitSeparator = 35,
    EmptyExponentDigitSeparator = 36,
    EmptyExponentConsecutiveDigitSeparator = 37,
    NoSpecial = 38,
    CaseSensitiveSpecial = 39,
    SpecialDigitSeparator = 40,
    SpecialConsecutiveDigitSeparator = 41,
    HasNan = 42,
    PositiveNan = 43,
    NegativeNan = 44,
    CaseSensitiveNan = 45,
    HasInf = 46,
    PositiveInf = 47,
    NegativeInf = 48,
    CaseSensitiveInf = 49,
    HasInfinity = 50,
    PositiveInfinity = 51,
    NegativeInfinity = 52,
    CaseSensitiveInfinity = 53,
    SupportsBasePrefix = 54,
    NoBasePrefix = 55,
    CaseSensitiveBasePrefix = 56,
    RequiredBasePrefix = 57,
    SupportsBaseSuffix = 58,
    NoBaseSuffix = 59,
    CaseSensitiveBaseSuffix = 60,
    RequiredBaseSuffix = 61,}

impl Flag {
    /// Every flag, in id order.
    pub const ALL: [Flag; 62] = [
        Flag::Simple,
        Flag::RequiredIntegerDigits,
        Flag::RequiredFractionDigits,
        Flag::RequiredExponentDigits,
        Flag::RequiredMantissaDigits,
        Flag::NoMantissaPositiveSign,
        Flag::RequiredMantissaSign,
        Flag::NoExponentNotation,
        Flag::NoExponentPositiveSign,
        Flag::RequiredExponentSign,
        Flag::NoExponentWithoutFraction,
        Flag::RequiredIntegerDigitsWithExponent,
        Flag::RequiredFractionDigitsWithExponent,
        Flag::RequiredMantissaDigitsWithExponent,
        Flag::NoIntegerLeadingZeros,
        Flag::NoFloatLeadingZeros,
        Flag::RequiredExponentNotation,
        Flag::CaseSensitiveExponent,
        Flag::IntegerInternalDigitSeparator,
        Flag::FractionInternalDigitSeparator,
        Flag::ExponentInternalDigitSeparator,
        Flag::IntegerLeadingDigitSeparator,
        Flag::FractionLeadingDigitSeparator,
        Flag::ExponentLeadingDigitSeparator,
        Flag::IntegerTrailingDigitSeparator,
        Flag::FractionTrailingDigitSeparator,
        Flag::ExponentTrailingDigitSeparator,
        Flag::IntegerConsecutiveDigitSeparator,
        Flag::FractionConsecutiveDigitSeparator,
        Flag::ExponentConsecutiveDigitSeparator,
        Flag::EmptyIntegerDigitSeparator,
        Flag::EmptyIntegerConsecutiveDigitSeparator,
        Flag::EmptyFractionDigitSeparator,
        Flag::EmptyFractionConsecutiveDigitSeparator,
        Flag::EmptyMantissaDigitSeparator,
        Flag::EmptyMantissaConsecutiveDigitSeparator,
        Flag::EmptyExponentDigitSeparator,
        Flag::EmptyExponentConsecutiveDigitSeparator,
        Flag::NoSpecial,
        Flag::CaseSensitiveSpecial,
        Flag::SpecialDigitSeparator,
        Flag::SpecialConsecutiveDigitSeparator,
        Flag::HasNan,
        Flag::PositiveNan,
        Flag::NegativeNan,
        Flag::CaseSensitiveNan,
        Flag::HasInf,
        Flag::PositiveInf,
        Flag::NegativeInf,
        Flag::CaseSensitiveInf,
        Flag::HasInfinity,
        Flag::PositiveInfinity,
        Flag::NegativeInfinity,
        Flag::CaseSensitiveInfinity,
        Flag::SupportsBasePrefix,
        Flag::NoBasePrefix,
        Flag::CaseSensitiveBasePrefix,
        Flag::RequiredBasePrefix,
        Flag::SupportsBaseSuffix,
        Flag::NoBaseSuffix,
        Flag::CaseSensitiveBaseSuffix,
        Flag::RequiredBaseSuffix,    ];

    #[must_use]
    pub const fn id(self) -> u16 {
        self as u16
    }

    #[must_use]
    pub fn descriptor(self) -> &'static FlagDescriptor {
        &CATALOG[self as usize]
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn short_code(self) -> &'static str {
        self.descriptor().short_code
    }

    pub fn outcome(self) -> Outcome {
        self.descriptor().outcome
    }
}

impl TryFrom<u16> for Flag {
    type Error = Error;

    fn try_from(id: u16) -> Result<Self> {
        Flag::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(Error::UnknownFlag(id))
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TEST {}", self.id())
    }
}

/// Looks up a descriptor by id.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::catalog::{lookup, Outcome};
///
/// let descriptor = lookup(18).unwrap();
/// assert_eq!(descriptor.title, "Integer internal digit separator.");
/// assert_eq!(descriptor.short_code, "I/I");
/// assert_eq!(descriptor.outcome, Outcome::Pass);
/// assert!(lookup(62).is_none());
/// ```
pub fn lookup(id: u16) -> Option<&'static FlagDescriptor> {
    CATALOG.get(usize::from(id))
}

/// All descriptors, indexed by id.
pub static CATALOG: [FlagDescriptor; 62] = [
    entry(0, "Simple", "", Outcome::Pass),
    entry(1, "Required integer digits.", "I/R", Outcome::Fail),
    entry(2, "Required fraction digits.", "F/R", Outcome::Fail),
    entry(3, "Required exponent digits.", "E/R", Outcome::Fail),
    entry(4, "Required mantissa digits.", "M/R", Outcome::Fail),
    entry(5, "No mantissa positive sign.", "+/M", Outcome::Fail),
    entry(6, "Required positive sign.", "R/M", Outcome::Fail),
    entry(7, "No exponent notation.", "e/e", Outcome::Fail),
    entry(8, "No exponent positive sign.", "+/E", Outcome::Fail),
    entry(9, "Required exponent sign.", "R/E", Outcome::Fail),
    entry(10, "No exponent without fraction.", "e/F", Outcome::Fail),
    entry(11, "Require integer digits with exponent.", "I/E", Outcome::Fail),
    entry(12, "Require fraction digits with exponent.", "F/E", Outcome::Fail),
    entry(13, "Require mantissa digits with exponent.", "M/E", Outcome::Fail),
    entry(14, "No integer leading zeros.", "N/I", Outcome::Assert),
    entry(15, "No float leading zeros.", "N/F", Outcome::Assert),
    entry(16, "Required exponent notation.", "R/e", Outcome::Fail),
    entry(17, "Case-sensitive exponent character.", "e/C", Outcome::Fail),
    entry(18, "Integer internal digit separator.", "I/I", Outcome::Pass),
    entry(19, "Fraction internal digit separator.", "F/I", Outcome::Pass),
    entry(20, "Exponent internal digit separator.", "E/I", Outcome::Pass),
    entry(21, "Integer leading digit separator.", "I/L", Outcome::Pass),
    entry(22, "Fraction leading digit separator.", "F/L", Outcome::Pass),
    entry(23, "Exponent leading digit separator.", "E/L", Outcome::Pass),
    entry(24, "Integer trailing digit separator.", "I/T", Outcome::Pass),
    entry(25, "Fraction trailing digit separator.", "F/T", Outcome::Pass),
    entry(26, "Exponent trailing digit separator.", "E/T", Outcome::Pass),
    entry(27, "Integer consecutive digit separator.", "I/C", Outcome::Pass),
    entry(28, "Fraction consecutive digit separator.", "F/C", Outcome::Pass),
    entry(29, "Exponent consecutive digit separator.", "E/C", Outcome::Pass),
    entry(30, "Digit separator with empty integer.", "_/I", Outcome::Pass),
    entry(31, "Consecutive digit separator with empty integer.", "'/I", Outcome::Pass),
    entry(32, "Digit separator with empty fraction.", "_/F", Outcome::Pass),
    entry(33, "Consecutive digit separator with empty fraction.", "'/F", Outcome::Pass),
    entry(34, "Digit separator with empty mantissa.", "_/M", Outcome::Pass),
    entry(35, "Consecutive digit separator with empty mantissa.", "'/M", Outcome::Pass),
    entry(36, "Digit separator with empty exponent.", "_/E", Outcome::Pass),
    entry(37, "Consecutive digit separator with empty exponent.", "'/E", Outcome::Pass),
    entry(38, "No special (non-finite) values.", "S/S", Outcome::Fail),
    entry(39, "Case-sensitive special (non-finite) values.", "S/c", Outcome::Fail),
    entry(40, "Special (non-finite) digit separator.", "S/_", Outcome::Pass),
    entry(41, "Consecutive special digit separator.", "S/C", Outcome::Pass),
    entry(42, "Has a representation of NaN.", "h/N", Outcome::Pass),
    entry(43, "Allows a positive sign before a representation of NaN.", "+/N", Outcome::Pass),
    entry(44, "Allows a negative sign before a representation of NaN.", "-/N", Outcome::Pass),
    entry(45, "Has a case-sensitive representation of NaN.", "c/N", Outcome::Fail),
    entry(46, "Has a representation of short infinity.", "h/S", Outcome::Pass),
    entry(47, "Allows a positive sign before a representation of short infinity.", "+/S", Outcome::Pass),
    entry(48, "Allows a negative sign before a representation of short infinity.", "-/S", Outcome::Pass),
    entry(49, "Has a case-sensitive representation of short infinity.", "c/S", Outcome::Fail),
    entry(50, "Has a representation of long infinity.", "h/L", Outcome::Pass),
    entry(51, "Allows a positive sign before a representation of long infinity.", "+/L", Outcome::Pass),
    entry(52, "Allows a negative sign before a representation of long infinity.", "-/L", Outcome::Pass),
    entry(53, "Has a case-sensitive representation of long infinity.", "c/L", Outcome::Fail),
    entry(54, "Supports base prefixes.", "s/P", Outcome::Pass),
    entry(55, "Does not support base prefixes.", "n/P", Outcome::Fail),
    entry(56, "Case-sensitive base prefix.", "e/P", Outcome::Fail),
    entry(57, "Require base prefixes.", "r/P", Outcome::Fail),
    entry(58, "Supports base suffixes.", "s/S", Outcome::Pass),
    entry(59, "Does not support base suffixes.", "n/S", Outcome::Fail),
    entry(60, "Case-sensitive base suffix.", "e/S", Outcome::Fail),
    entry(61, "Require base suffixes.", "r/S", Outcome::Fail),];
