use crate::{
    error::{ConvertError, ConvertResult},
    numeral::digit::ALPHABET_LEN,
};

/// The base of a positional numeral system, always within `1..=36`.
///
/// Radix 1 is unary: a quantity `N` is written as `N` copies of the symbol
/// `1`, and there is no fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Unary counting.
    pub const UNARY: Self = Self(1);
    /// The largest radix the digit alphabet can express.
    pub const MAX: Self = Self(ALPHABET_LEN);

    /// Returns a radix if `value` is within `1..=36`.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if matches!(value, 1..=ALPHABET_LEN) { Some(Self(value)) } else { None }
    }

    /// Parses a radix from a decimal integer token.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidRadix` if the token is not an integer or
    /// lies outside `1..=36`.
    ///
    /// # Example
    /// ```
    /// use radix::{error::ConvertError, numeral::radix::Radix};
    ///
    /// assert_eq!(Radix::parse("16").unwrap().get(), 16);
    /// assert_eq!(Radix::parse("37"), Err(ConvertError::invalid_radix("37")));
    /// assert_eq!(Radix::parse("ten"), Err(ConvertError::invalid_radix("ten")));
    /// ```
    pub fn parse(token: &str) -> ConvertResult<Self> {
        token.parse::<i64>()
             .ok()
             .and_then(|value| u32::try_from(value).ok())
             .and_then(Self::new)
             .ok_or_else(|| ConvertError::invalid_radix(token))
    }

    /// Returns the numeric value of the radix.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` for base 1.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        self.0 == Self::UNARY.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
