use crate::{
    error::ConvertResult,
    numeral::{
        parser::{check_number, is_zero_digits, split_number},
        radix::Radix,
    },
};

/// A validated number in its source radix, split at the radix point.
///
/// Built once by [`SourceNumber::new`] and never mutated afterward. The
/// integer digits are always non-empty and every digit is valid for the radix
/// the number was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNumber {
    raw:              String,
    integer_digits:   String,
    fraction_digits:  String,
    is_fraction_zero: bool,
}

impl SourceNumber {
    /// Validates `raw` in `radix` and splits it.
    ///
    /// The fraction is dropped and marked zero when the radix is unary, when
    /// there was no `.`, or when every fraction digit is `0`, so `5`, `5.0`
    /// and `5.000` are all the same number.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidNumber` if `raw` is not a valid number in
    /// `radix`.
    ///
    /// # Example
    /// ```
    /// use radix::numeral::{radix::Radix, value::SourceNumber};
    ///
    /// let hex = Radix::new(16).unwrap();
    /// let n = SourceNumber::new(hex, "ff.80").unwrap();
    /// assert_eq!(n.fraction_digits(), "80");
    /// assert!(!n.is_fraction_zero());
    ///
    /// let n = SourceNumber::new(hex, "ff.00").unwrap();
    /// assert_eq!(n.fraction_digits(), "");
    /// assert!(n.is_fraction_zero());
    /// ```
    pub fn new(radix: Radix, raw: &str) -> ConvertResult<Self> {
        check_number(radix, raw)?;

        let (integer, fraction) = split_number(raw);
        let is_fraction_zero = radix.is_unary() || is_zero_digits(fraction);

        Ok(Self { raw:              raw.to_string(),
                  integer_digits:   integer.to_string(),
                  fraction_digits:  if is_fraction_zero { String::new() } else { fraction.to_string() },
                  is_fraction_zero, })
    }

    /// The token the number was built from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    /// Fraction digits, empty when [`Self::is_fraction_zero`] is set.
    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction_digits
    }

    #[must_use]
    pub const fn is_fraction_zero(&self) -> bool {
        self.is_fraction_zero
    }
}

/// A number normalised to a native integer and a fraction in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalValue {
    /// Whole part.
    pub integer:  u64,
    /// Fractional part.
    pub fraction: f64,
}
