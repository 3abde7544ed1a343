/// Numeric conversion helpers.
///
/// This module provides small, checked conversions between the integer and
/// floating-point types the converter moves values through. Conversions that
/// can lose data return a `Result` instead of silently truncating.
pub mod num;
