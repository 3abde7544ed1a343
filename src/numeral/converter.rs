/// The `Converter` type and the linear conversion pipeline.
pub mod core;
/// Normalisation of source digits to a native integer and fraction.
pub mod decimal;
/// Rendering of a normalised value into target digits.
pub mod render;
