use crate::error::{ConvertError, ConvertResult};

/// Safely converts a `usize` to `u64`, returning `error` if it does not fit.
///
/// ## Errors
/// Returns `Err(error)` on targets where `usize` is wider than 64 bits and the
/// value exceeds `u64::MAX`.
///
/// ## Example
/// ```
/// use radix::util::num::usize_to_u64_checked;
///
/// assert_eq!(usize_to_u64_checked(4, "too long"), Ok(4));
/// ```
pub fn usize_to_u64_checked<E>(value: usize, error: E) -> Result<u64, E> {
    u64::try_from(value).map_or(Err(error), Ok)
}

/// Longest unary string that will be rendered (`i32::MAX` symbols).
pub const MAX_UNARY_LEN: u64 = 2_147_483_647;

/// Converts a `u64` to the length of its unary rendering.
///
/// ## Errors
/// Returns `ConvertError::UnaryTooLong` if the value exceeds
/// [`MAX_UNARY_LEN`] or cannot be addressed on this target.
///
/// ## Example
/// ```
/// use radix::{
///     error::ConvertError,
///     util::num::{MAX_UNARY_LEN, unary_len_checked},
/// };
///
/// assert_eq!(unary_len_checked(255).unwrap(), 255);
///
/// let err = unary_len_checked(MAX_UNARY_LEN + 1).unwrap_err();
/// assert!(matches!(err, ConvertError::UnaryTooLong { .. }));
/// ```
pub fn unary_len_checked(value: u64) -> ConvertResult<usize> {
    if value > MAX_UNARY_LEN {
        return Err(ConvertError::UnaryTooLong { value });
    }

    usize::try_from(value).map_or(Err(ConvertError::UnaryTooLong { value }), Ok)
}

/// Converts a digit position to an `i32` exponent, saturating at `i32::MAX`.
///
/// Positions past `i32::MAX` only ever occur for absurdly long fractions, where
/// the place value has long since underflowed to zero anyway.
#[must_use]
pub fn usize_to_i32_saturating(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Truncates a non-negative product to the digit it selects.
///
/// The caller guarantees `value` lies in `[0, radix)` with `radix <= 36`, so
/// truncation toward zero is exactly the digit value.
///
/// ## Example
/// ```
/// use radix::util::num::f64_to_digit;
///
/// assert_eq!(f64_to_digit(15.999), 15);
/// assert_eq!(f64_to_digit(0.25), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_digit(value: f64) -> u32 {
    value.trunc() as u32
}
