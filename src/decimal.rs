//! Exact rendering of decimal and exponential literals.
//!
//! Values are kept as exact rationals (`integer + numer / denom`) in
//! [`BigUint`]s, so an expectation such as `11.11` in radix 2 renders as
//! `3.75` with no binary floating-point noise on the way.
//!
//! ## Examples
//!
//! ```rust
//! use numeric_fixtures::{Composer, Decimal, Dialect};
//!
//! let dialect = Dialect::default();
//! let composer = Composer::new(&dialect);
//!
//! assert_eq!(composer.compose(&Decimal::new(19, 5, 1)).unwrap(), "19.5");
//! assert_eq!(composer.compose(&Decimal::new(1, 0, 1).exponent(3)).unwrap(), "1.0e3");
//!
//! // literal-only grammars absorb the exponent
//! let folded = Decimal::new(1, 0, 1).exponent(3).no_exponent(true);
//! assert_eq!(composer.compose(&folded).unwrap(), "1000.0");
//! ```

use crate::radix::to_digits;
use crate::{Dialect, Error, Result, SignPolicy};
use num_bigint::BigUint;

/// Largest fraction digit count [`fraction_digits`] will return.
pub const MAX_FRACTION_DIGITS: u32 = 17;

fn is_zero(n: &BigUint) -> bool {
    n.bits() == 0
}

/// A non-negative rational `numer / denom`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    numer: BigUint,
    denom: BigUint,
}

impl Fraction {
    /// # Errors
    ///
    /// Returns [`Error::Custom`] for a zero denominator.
    pub fn new(numer: impl Into<BigUint>, denom: impl Into<BigUint>) -> Result<Self> {
        let denom = denom.into();
        if is_zero(&denom) {
            return Err(Error::custom("fraction denominator must be non-zero"));
        }
        Ok(Fraction {
            numer: numer.into(),
            denom,
        })
    }

    /// `numer / radix^digits`.
    pub fn from_digits(numer: impl Into<BigUint>, radix: u32, digits: u32) -> Self {
        Fraction {
            numer: numer.into(),
            denom: BigUint::from(radix).pow(digits),
        }
    }

    pub fn numer(&self) -> &BigUint {
        &self.numer
    }

    pub fn denom(&self) -> &BigUint {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        is_zero(&self.numer)
    }
}

/// Minimal digit count `d` such that `value · radix^d` is an integer, capped
/// at [`MAX_FRACTION_DIGITS`].
///
/// A zero value needs one digit (`0.0`). Values that never terminate in
/// `radix` return the cap.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::decimal::{fraction_digits, Fraction};
///
/// assert_eq!(fraction_digits(&Fraction::new(1u32, 2u32).unwrap(), 10), 1);
/// assert_eq!(fraction_digits(&Fraction::new(3u32, 4u32).unwrap(), 10), 2);
/// assert_eq!(fraction_digits(&Fraction::new(1u32, 3u32).unwrap(), 10), 17);
/// ```
pub fn fraction_digits(value: &Fraction, radix: u32) -> u32 {
    if value.is_zero() {
        return 1;
    }

    let radix = BigUint::from(radix);
    let mut digits = 0;
    let mut scaled = value.numer.clone();
    while scaled < value.denom && digits < MAX_FRACTION_DIGITS {
        scaled *= &radix;
        digits += 1;
    }
    while !is_zero(&(&scaled % &value.denom)) && digits < MAX_FRACTION_DIGITS {
        scaled *= &radix;
        digits += 1;
    }
    digits
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Part {
    /// `numer / mantissa_radix^digits`, resolved against the dialect.
    Digits { numer: BigUint, digits: u32 },
    Exact(Fraction),
}

/// A decimal value waiting to be composed: `integer + fraction`, with an
/// optional exponent and sign overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    integer: BigUint,
    fraction: Part,
    exponent: Option<i64>,
    mantissa_sign: Option<String>,
    exponent_sign: Option<String>,
    negative: bool,
    no_exponent: Option<bool>,
}

impl Decimal {
    /// `integer + numer / r^digits`, where `r` is the dialect's mantissa radix.
    #[must_use]
    pub fn new(integer: u64, numer: u64, digits: u32) -> Self {
        Decimal::with_part(
            BigUint::from(integer),
            Part::Digits {
                numer: BigUint::from(numer),
                digits,
            },
        )
    }

    /// `integer + fraction`, where the fraction is already an exact rational.
    #[must_use]
    pub fn from_magnitude(integer: u64, fraction: Fraction) -> Self {
        Decimal::with_part(BigUint::from(integer), Part::Exact(fraction))
    }

    fn with_part(integer: BigUint, fraction: Part) -> Self {
        Decimal {
            integer,
            fraction,
            exponent: None,
            mantissa_sign: None,
            exponent_sign: None,
            negative: false,
            no_exponent: None,
        }
    }

    /// Power of the exponent base. Zero means no exponent.
    #[must_use]
    pub fn exponent(mut self, exponent: i64) -> Self {
        self.exponent = (exponent != 0).then_some(exponent);
        self
    }

    /// Overrides the mantissa sign the dialect would render.
    #[must_use]
    pub fn mantissa_sign(mut self, sign: &str) -> Self {
        self.mantissa_sign = Some(sign.to_string());
        self
    }

    /// Overrides the exponent sign the dialect would render.
    #[must_use]
    pub fn exponent_sign(mut self, sign: &str) -> Self {
        self.exponent_sign = Some(sign.to_string());
        self
    }

    #[must_use]
    pub fn negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Overrides the dialect's `no_exponent` toggle for this value. A dialect
    /// whose exponent base is not 10 folds regardless.
    #[must_use]
    pub fn no_exponent(mut self, no_exponent: bool) -> Self {
        self.no_exponent = Some(no_exponent);
        self
    }
}

/// Renders [`Decimal`]s and raw tokens against one dialect.
#[derive(Clone, Copy, Debug)]
pub struct Composer<'a> {
    dialect: &'a Dialect,
}

impl<'a> Composer<'a> {
    #[must_use]
    pub fn new(dialect: &'a Dialect) -> Self {
        Composer { dialect }
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    /// Renders `sign integer point fraction [exp-char exp-sign exponent]`.
    ///
    /// The integer, fraction and exponent are written in decimal. The
    /// exponent is first folded into the mantissa exactly, as powers of the
    /// exponent base, when exponents are disabled or when the exponent base
    /// is not 10, since a decimal exponent only reads back as powers of ten.
    ///
    /// # Errors
    ///
    /// Fails when a sign policy forbids the sign being rendered.
    pub fn compose(&self, decimal: &Decimal) -> Result<String> {
        let mut integer = decimal.integer.clone();
        let mut fraction = match &decimal.fraction {
            Part::Digits { numer, digits } => {
                Fraction::from_digits(numer.clone(), self.dialect.mantissa_radix(), *digits)
            }
            Part::Exact(fraction) => fraction.clone(),
        };

        let mut exponent = decimal.exponent;
        let no_exponent = self.dialect.exponent_base() != 10
            || decimal
                .no_exponent
                .unwrap_or_else(|| self.dialect.no_exponent());
        if no_exponent {
            if let Some(power) = exponent.take() {
                let factor = self.exponent_factor(power)?;
                if power > 0 {
                    integer *= &factor;
                    fraction.numer *= &factor;
                } else {
                    fraction.numer = &integer * &fraction.denom + &fraction.numer;
                    fraction.denom *= &factor;
                    integer = BigUint::default();
                }
            }
        }

        // carry any overflow so the fraction is proper
        integer += &fraction.numer / &fraction.denom;
        fraction.numer %= &fraction.denom;

        let digits = decimal_fraction(&mut integer, &fraction);
        let sign = match &decimal.mantissa_sign {
            Some(sign) => sign.clone(),
            None => self.dialect.mantissa_sign().sign(decimal.negative)?.to_string(),
        };

        let mut text = format!("{sign}{integer}{}{digits}", self.dialect.decimal_point());
        if let Some(power) = exponent {
            let exp_sign = match &decimal.exponent_sign {
                Some(sign) => sign.clone(),
                None => self.dialect.exponent_sign().sign(power < 0)?.to_string(),
            };
            text.push(self.dialect.exponent_char());
            text.push_str(&exp_sign);
            text.push_str(&power.unsigned_abs().to_string());
        }
        Ok(text)
    }

    fn exponent_factor(&self, power: i64) -> Result<BigUint> {
        let power = u32::try_from(power.unsigned_abs())
            .map_err(|_| Error::custom(&format!("exponent {power} is too large to fold")))?;
        Ok(BigUint::from(self.dialect.exponent_base()).pow(power))
    }

    /// Assembles `sign prefix value suffix`. Each part left as `None` comes
    /// from the dialect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numeric_fixtures::{Composer, Dialect};
    ///
    /// let dialect = Dialect::builder().with_base_prefix(Some('x')).build().unwrap();
    /// let composer = Composer::new(&dialect);
    /// assert_eq!(composer.to_actual("11", None, None, None, false).unwrap(), "0x11");
    /// assert_eq!(composer.to_actual("11", Some("+"), Some(""), None, false).unwrap(), "+11");
    /// ```
    pub fn to_actual(
        &self,
        value: &str,
        sign: Option<&str>,
        prefix: Option<&str>,
        suffix: Option<&str>,
        is_negative: bool,
    ) -> Result<String> {
        let sign = match sign {
            Some(sign) => sign,
            None => self.dialect.mantissa_sign().sign(is_negative)?,
        };
        let prefix = match prefix {
            Some(prefix) => prefix.to_string(),
            None => self.dialect.prefix_text(),
        };
        let suffix = match suffix {
            Some(suffix) => suffix.to_string(),
            None => self.dialect.suffix_text(),
        };
        Ok(format!("{sign}{prefix}{value}{suffix}"))
    }

    /// A non-negative integer written in the mantissa radix, with the
    /// dialect's sign and affixes.
    pub fn to_int_actual(&self, value: u32) -> Result<String> {
        let digits = to_digits(i64::from(value), self.dialect.mantissa_radix())?;
        self.to_actual(&digits, None, None, None, false)
    }

    /// The decimal expectation for an integer, signed by `sign` or the
    /// dialect's mantissa sign policy.
    pub fn to_int_expected(&self, value: i64, sign: Option<SignPolicy>) -> Result<String> {
        let sign = sign.unwrap_or_else(|| self.dialect.mantissa_sign());
        Ok(format!(
            "{}{}",
            sign.sign(value < 0)?,
            value.unsigned_abs()
        ))
    }
}

/// Decimal digits of a proper fraction.
///
/// Terminating expansions are exact. Others are rounded half-up at
/// [`MAX_FRACTION_DIGITS`] places after the point, leading zeros included,
/// carrying into `integer` when the digits overflow.
fn decimal_fraction(integer: &mut BigUint, fraction: &Fraction) -> String {
    if fraction.is_zero() {
        return "0".to_string();
    }

    let digits = fraction_digits(fraction, 10);
    let scale = BigUint::from(10u32).pow(digits);
    let scaled = &fraction.numer * &scale;
    let mut quotient = &scaled / &fraction.denom;
    let remainder = &scaled % &fraction.denom;
    if remainder * 2u32 >= fraction.denom {
        quotient += 1u32;
    }
    if quotient >= scale {
        *integer += 1u32;
        quotient -= &scale;
    }

    let text = format!("{:0>width$}", quotient.to_string(), width = digits as usize);
    let trimmed = text.trim_end_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
