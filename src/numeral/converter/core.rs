use log::info;

use crate::{
    error::ConvertResult,
    numeral::{
        converter::{decimal, render},
        radix::Radix,
        value::{DecimalValue, SourceNumber},
    },
};

/// Converts one validated number from a source radix to a target radix.
///
/// All fields are set once by [`Converter::new`]. Conversion does not mutate
/// the converter, so [`Converter::convert`] is repeatable.
///
/// # Example
/// ```
/// use radix::numeral::{converter::core::Converter, radix::Radix};
///
/// let ten = Radix::new(10).unwrap();
/// let two = Radix::new(2).unwrap();
/// let converter = Converter::new(ten, "0.5", two).unwrap();
/// assert_eq!(converter.convert().unwrap(), "0.10000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    source: Radix,
    target: Radix,
    number: SourceNumber,
}

impl Converter {
    /// Builds a converter for `number`, written in `source`.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidNumber` if `number` is not valid in
    /// `source`.
    pub fn new(source: Radix, number: &str, target: Radix) -> ConvertResult<Self> {
        Ok(Self { source,
                  target,
                  number: SourceNumber::new(source, number)? })
    }

    /// Normalises the source number.
    ///
    /// # Errors
    /// Never fails for a converter built by [`Converter::new`].
    pub fn to_decimal(&self) -> ConvertResult<DecimalValue> {
        decimal::to_decimal(&self.number, self.source)
    }

    /// Renders a normalised value in the target radix.
    ///
    /// # Errors
    /// Returns `ConvertError::UnaryTooLong` if a base 1 rendering cannot be
    /// addressed.
    pub fn to_target(&self, value: &DecimalValue) -> ConvertResult<String> {
        render::to_target(value, self.target, self.number.is_fraction_zero())
    }

    /// Runs normalisation followed by rendering.
    ///
    /// # Errors
    /// See [`Converter::to_decimal`] and [`Converter::to_target`].
    pub fn convert(&self) -> ConvertResult<String> {
        let value = self.to_decimal()?;
        let result = self.to_target(&value)?;
        info!("[{}] in radix {} is [{result}] in radix {}",
              self.number.raw(),
              self.source,
              self.target);
        Ok(result)
    }
}
