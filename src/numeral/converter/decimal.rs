use log::debug;

use crate::{
    error::{ConvertError, ConvertResult},
    numeral::{lexer::digits_in_radix, radix::Radix, value::{DecimalValue, SourceNumber}},
    util::num::{usize_to_i32_saturating, usize_to_u64_checked},
};

/// Computes the positional value `Σ digit[i] × radix^(n-1-i)`.
///
/// Returns `None` on `u64` overflow.
///
/// # Example
/// ```
/// use radix::numeral::{converter::decimal::positional_value, radix::Radix};
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(positional_value(&[15, 15], hex), Some(255));
/// assert_eq!(positional_value(&[], hex), Some(0));
/// ```
#[must_use]
pub fn positional_value(digits: &[u32], radix: Radix) -> Option<u64> {
    digits.iter().try_fold(0_u64, |acc, &digit| {
                     acc.checked_mul(u64::from(radix.get()))?.checked_add(u64::from(digit))
                 })
}

/// Largest fraction a [`DecimalValue`] holds; sums that round up to `1.0`
/// are pulled back to it.
pub const MAX_FRACTION: f64 = 1.0 - f64::EPSILON;

/// Computes `Σ digit[i] / radix^(i+1)` over fraction digits.
///
/// The result is always in `[0, 1)`, even for long runs of the largest digit.
///
/// # Example
/// ```
/// use radix::numeral::{converter::decimal::fraction_value, radix::Radix};
///
/// let ten = Radix::new(10).unwrap();
/// assert!((fraction_value(&[2, 5], ten) - 0.25).abs() < f64::EPSILON);
/// assert!(fraction_value(&[9; 30], ten) < 1.0);
/// ```
#[must_use]
pub fn fraction_value(digits: &[u32], radix: Radix) -> f64 {
    let base = f64::from(radix.get());
    digits.iter()
          .enumerate()
          .map(|(i, &digit)| f64::from(digit) / base.powi(usize_to_i32_saturating(i + 1)))
          .sum::<f64>()
          .min(MAX_FRACTION)
}

/// Normalises a source number to a [`DecimalValue`].
///
/// In radix 1 the integer is the number of digits and the fraction is zero.
///
/// # Errors
/// Returns `ConvertError::InvalidNumber` if the digits are not valid in
/// `radix` or the integer overflows `u64`. A `SourceNumber` built for the same
/// radix always passes.
pub fn to_decimal(number: &SourceNumber, radix: Radix) -> ConvertResult<DecimalValue> {
    let invalid = || ConvertError::invalid_number(number.raw());

    let value = if radix.is_unary() {
        DecimalValue { integer:  usize_to_u64_checked(number.integer_digits().len(), invalid())?,
                       fraction: 0.0, }
    } else {
        let integer = digits_in_radix(number.integer_digits(), radix.get())
            .and_then(|digits| positional_value(&digits, radix))
            .ok_or_else(invalid)?;
        let fraction = digits_in_radix(number.fraction_digits(), radix.get())
            .map(|digits| fraction_value(&digits, radix))
            .ok_or_else(invalid)?;
        DecimalValue { integer, fraction }
    };

    debug!("[{}] in radix {radix} normalised to {value:?}", number.raw());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(value: u32) -> Radix {
        Radix::new(value).unwrap()
    }

    #[test]
    fn integer_parts() {
        let n = SourceNumber::new(radix(16), "ff").unwrap();
        assert_eq!(to_decimal(&n, radix(16)).unwrap(), DecimalValue { integer: 255, fraction: 0.0 });

        let n = SourceNumber::new(radix(2), "101").unwrap();
        assert_eq!(to_decimal(&n, radix(2)).unwrap().integer, 5);
    }

    #[test]
    fn fraction_parts() {
        let n = SourceNumber::new(radix(2), "0.11").unwrap();
        assert!((to_decimal(&n, radix(2)).unwrap().fraction - 0.75).abs() < f64::EPSILON);

        let n = SourceNumber::new(radix(16), "a.8").unwrap();
        let value = to_decimal(&n, radix(16)).unwrap();
        assert_eq!(value.integer, 10);
        assert!((value.fraction - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unary_counts_digits() {
        let n = SourceNumber::new(Radix::UNARY, "1111").unwrap();
        assert_eq!(to_decimal(&n, Radix::UNARY).unwrap(), DecimalValue { integer: 4, fraction: 0.0 });
    }

    #[test]
    fn zero_fraction_normalises_to_zero() {
        let n = SourceNumber::new(radix(10), "5.000").unwrap();
        assert_eq!(to_decimal(&n, radix(10)).unwrap(), DecimalValue { integer: 5, fraction: 0.0 });
    }

    #[test]
    fn runs_of_largest_digit_stay_below_one() {
        for (value, digit) in [(10, 9), (16, 15), (36, 35), (3, 2)] {
            let fraction = fraction_value(&[digit; 40], radix(value));
            assert!((0.0..1.0).contains(&fraction), "radix {value} gave {fraction}");
        }
    }

    #[test]
    fn overflow_is_detected() {
        assert_eq!(positional_value(&[1; 20], radix(10)), Some(11_111_111_111_111_111_111));
        assert_eq!(positional_value(&[1; 21], radix(10)), None);
    }

    #[test]
    fn mismatched_radix_is_rejected() {
        let n = SourceNumber::new(radix(16), "ff").unwrap();
        assert_eq!(to_decimal(&n, radix(10)), Err(ConvertError::invalid_number("ff")));
    }
}
