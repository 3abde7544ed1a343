//! # radix
//!
//! radix converts real numbers between positional numeral systems.
//! It reads a source radix, a number, and a target radix, validates all three,
//! and renders the number in the target radix with up to five fractional
//! digits. Every radix from unary (1) to 36 is supported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::{ConvertError, ConvertResult},
    numeral::{converter::core::Converter, parser::check_number, radix::Radix},
};

/// Provides the error type for every stage of a conversion.
///
/// This module defines the errors raised while reading radices, validating
/// numbers, and rendering results. Each error knows how to print itself as
/// the single line shown to the user.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes.
/// - Carries the offending token so messages can echo it back.
pub mod error;
/// Orchestrates the numeral system conversion.
///
/// This module ties together radix parsing, number lexing and validation,
/// normalisation, and rendering.
///
/// # Responsibilities
/// - Validates radices and numbers before any arithmetic runs.
/// - Converts source digits to a native intermediate value.
/// - Renders that value in the target radix.
pub mod numeral;
/// General utilities for safe numeric conversion.
pub mod util;

/// Converts a number given as three whitespace-separated tokens.
///
/// The tokens are read in order: source radix, number, target radix. Each is
/// validated before the next is read, so the first problem in the input is
/// the one reported. Tokens after the third are ignored.
///
/// # Errors
/// Returns an error if a token is missing, a radix is invalid, or the number
/// is not valid in the source radix.
///
/// # Examples
/// ```
/// use radix::get_result;
///
/// assert_eq!(get_result("10 255 16").unwrap(), "ff");
/// assert_eq!(get_result("1\n1111\n10\n").unwrap(), "4");
///
/// let err = get_result("37 1 10").unwrap_err();
/// assert_eq!(err.to_string(),
///            "Error! Radix: [37] must be a number between 1 and 36, inclusive.");
/// ```
pub fn get_result(input: &str) -> ConvertResult<String> {
    let mut tokens = input.split_whitespace();
    let mut next = |expected: &'static str| tokens.next().ok_or(ConvertError::MissingToken { expected });

    let source = Radix::parse(next("source radix")?)?;
    let number = next("number")?;
    check_number(source, number)?;
    let target = Radix::parse(next("target radix")?)?;

    run(source, number, target)
}

/// Converts `number` from `source_radix` to `target_radix`.
///
/// Validation happens in the same order as [`get_result`].
///
/// # Errors
/// Returns an error if a radix is invalid or the number is not valid in the
/// source radix.
///
/// # Examples
/// ```
/// use radix::convert;
///
/// assert_eq!(convert("10", "0.5", "2").unwrap(), "0.10000");
/// assert!(convert("2", "102", "10").is_err());
/// ```
pub fn convert(source_radix: &str, number: &str, target_radix: &str) -> ConvertResult<String> {
    let source = Radix::parse(source_radix)?;
    check_number(source, number)?;
    let target = Radix::parse(target_radix)?;

    run(source, number, target)
}

fn run(source: Radix, number: &str, target: Radix) -> ConvertResult<String> {
    debug!("converting [{number}] from radix {source} to radix {target}");
    Converter::new(source, number, target)?.convert()
}
