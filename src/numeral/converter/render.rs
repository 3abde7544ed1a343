use crate::{
    error::ConvertResult,
    numeral::{digit::digit_char, radix::Radix, value::DecimalValue},
    util::num::{f64_to_digit, unary_len_checked},
};

/// Number of fractional digits produced for non-unary targets.
pub const FRACTION_DIGITS: usize = 5;

/// Renders a non-negative integer in `radix`, which must not be unary.
///
/// Zero renders as `"0"`.
///
/// # Example
/// ```
/// use radix::numeral::{converter::render::render_integer, radix::Radix};
///
/// assert_eq!(render_integer(255, Radix::new(16).unwrap()), "ff");
/// assert_eq!(render_integer(0, Radix::new(2).unwrap()), "0");
/// ```
#[must_use]
pub fn render_integer(mut value: u64, radix: Radix) -> String {
    let base = u64::from(radix.get());
    let mut digits = Vec::new();

    loop {
        // `value % base` is below the radix, hence below 36.
        #[allow(clippy::cast_possible_truncation)]
        let digit = (value % base) as u32;
        digits.extend(digit_char(digit));
        value /= base;
        if value == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}

/// Renders a fraction in `[0, 1)` as `.` followed by exactly
/// [`FRACTION_DIGITS`] digits, truncating the rest.
///
/// # Example
/// ```
/// use radix::numeral::{converter::render::render_fraction, radix::Radix};
///
/// assert_eq!(render_fraction(0.5, Radix::new(2).unwrap()), ".10000");
/// assert_eq!(render_fraction(0.5, Radix::new(16).unwrap()), ".80000");
/// ```
#[must_use]
pub fn render_fraction(fraction: f64, radix: Radix) -> String {
    let base = f64::from(radix.get());
    let max_digit = radix.get() - 1;
    let mut remainder = fraction;
    let mut out = String::with_capacity(FRACTION_DIGITS + 1);
    out.push('.');

    for _ in 0..FRACTION_DIGITS {
        let scaled = remainder * base;
        let digit = f64_to_digit(scaled).min(max_digit);
        out.extend(digit_char(digit));
        remainder = scaled - f64::from(digit);
    }

    out
}

/// Renders `value` in `target`.
///
/// A unary target is `integer` copies of `1` and never has a fraction. Other
/// targets append [`render_fraction`] unless `is_fraction_zero` is set.
///
/// # Errors
/// Returns `ConvertError::UnaryTooLong` if a unary rendering would be longer
/// than [`MAX_UNARY_LEN`](crate::util::num::MAX_UNARY_LEN).
pub fn to_target(value: &DecimalValue, target: Radix, is_fraction_zero: bool) -> ConvertResult<String> {
    if target.is_unary() {
        return Ok("1".repeat(unary_len_checked(value.integer)?));
    }

    let mut out = render_integer(value.integer, target);
    if !is_fraction_zero {
        out.push_str(&render_fraction(value.fraction, target));
    }
    Ok(out)
}
