use log::debug;

use crate::{
    error::{ConvertError, ConvertResult},
    numeral::{converter::decimal::positional_value, lexer::digits_in_radix, radix::Radix},
};

/// Fraction used when a number has no `.` at all.
///
/// It parses to zero, which is how an absent fraction is later told apart
/// from a real one.
pub const NO_FRACTION: &str = "0";

/// Splits a number token on its first `.` into integer and fraction digits.
///
/// Without a `.`, the fraction is [`NO_FRACTION`]. Anything after the first
/// `.` is returned as-is, so `"1.2.3"` yields a fraction of `"2.3"` which then
/// fails validation.
///
/// # Example
/// ```
/// use radix::numeral::parser::split_number;
///
/// assert_eq!(split_number("ff.8"), ("ff", "8"));
/// assert_eq!(split_number("255"), ("255", "0"));
/// assert_eq!(split_number("5."), ("5", ""));
/// ```
#[must_use]
pub fn split_number(raw: &str) -> (&str, &str) {
    raw.split_once('.').unwrap_or((raw, NO_FRACTION))
}

/// Checks that `raw` is a valid number in `radix`.
///
/// - In radix 1 the integer part must be one or more `1`s. The fraction is
///   not inspected, because base 1 has no fractional part.
/// - Otherwise both parts must be non-empty, consist only of digits below the
///   radix, and the integer part must fit in a `u64`.
///
/// # Errors
/// Returns `ConvertError::InvalidNumber` carrying `raw` on any violation.
pub fn check_number(radix: Radix, raw: &str) -> ConvertResult<()> {
    let (integer, fraction) = split_number(raw);
    debug!("checking [{raw}] in radix {radix}: integer [{integer}], fraction [{fraction}]");

    let valid = if radix.is_unary() {
        is_unary_digits(integer)
    } else {
        let integer_ok = digits_in_radix(integer, radix.get())
            .filter(|digits| !digits.is_empty())
            .and_then(|digits| positional_value(&digits, radix))
            .is_some();
        let fraction_ok =
            digits_in_radix(fraction, radix.get()).is_some_and(|digits| !digits.is_empty());
        integer_ok && fraction_ok
    };

    if valid { Ok(()) } else { Err(ConvertError::invalid_number(raw)) }
}

/// Returns `true` if `digits` is one or more repetitions of `1`.
#[must_use]
pub fn is_unary_digits(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b == b'1')
}

/// Returns `true` if every digit of an already valid fraction is zero.
#[must_use]
pub fn is_zero_digits(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}
