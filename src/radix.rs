//! Integer to digit-string conversion in an arbitrary radix.
//!
//! Digits are drawn from `0-9A-Z`, so any radix in `2..=36` is representable.
//! Every dialect in use has a radix of at most 10, where the output is plain
//! decimal digits.

use crate::{Error, Result};

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;
/// Largest supported radix.
pub const MAX_RADIX: u32 = 36;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Checks that `radix` has a digit alphabet.
pub fn check_radix(radix: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(Error::invalid_dialect(&format!(
            "radix {radix} is outside {MIN_RADIX}..={MAX_RADIX}"
        )))
    }
}

/// Writes `value` in `radix`, most significant digit first.
///
/// Negative values are written as their magnitude with a leading `-`.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::radix::to_digits;
///
/// assert_eq!(to_digits(11, 10).unwrap(), "11");
/// assert_eq!(to_digits(3, 2).unwrap(), "11");
/// assert_eq!(to_digits(-5, 2).unwrap(), "-101");
/// assert_eq!(to_digits(255, 16).unwrap(), "FF");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDialect`] when `radix` is outside `2..=36`.
pub fn to_digits(value: i64, radix: u32) -> Result<String> {
    check_radix(radix)?;
    let radix = radix as u64;
    let mut n = value.unsigned_abs();

    let mut digits = Vec::new();
    while n >= radix {
        digits.push(ALPHABET[(n % radix) as usize]);
        n /= radix;
    }
    digits.push(ALPHABET[n as usize]);
    if value < 0 {
        digits.push(b'-');
    }
    digits.reverse();

    // every byte comes from the ASCII alphabet or is '-'
    Ok(digits.into_iter().map(char::from).collect())
}

/// Flips the case of an ASCII letter; other ASCII characters are returned as-is.
///
/// # Examples
///
/// ```rust
/// use numeric_fixtures::radix::swap_case;
///
/// assert_eq!(swap_case('e').unwrap(), 'E');
/// assert_eq!(swap_case('X').unwrap(), 'x');
/// assert_eq!(swap_case('_').unwrap(), '_');
/// assert!(swap_case('é').is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::NonAscii`] outside the ASCII plane, where case toggling is
/// undefined.
pub fn swap_case(ch: char) -> Result<char> {
    if !ch.is_ascii() {
        return Err(Error::NonAscii(ch));
    }
    if ch.is_ascii_lowercase() {
        Ok(ch.to_ascii_uppercase())
    } else {
        Ok(ch.to_ascii_lowercase())
    }
}
