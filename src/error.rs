/// Conversion errors.
///
/// Defines every failure that can occur while reading, validating, or
/// converting a number. Radix and number errors carry the offending input
/// token so it can be echoed back to the user verbatim.
pub mod convert_error;

pub use convert_error::{ConvertError, ConvertResult};
