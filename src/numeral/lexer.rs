use logos::Logos;

use crate::numeral::digit::digit_value;

/// Represents a lexical token inside a number literal such as `ff.8`.
///
/// Each alphanumeric character is its own `Digit` token so that validation
/// can check every digit value against the radix independently.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumeralToken {
    /// A single digit symbol, carrying its value in the alphabet.
    #[regex(r"[0-9a-zA-Z]", |lex| lex.slice().chars().next().and_then(digit_value))]
    Digit(u32),
    /// `.`
    #[token(".")]
    Point,
    /// `+` or `-`. Numbers are unsigned, so this only ever produces an error.
    #[regex(r"[+-]")]
    Sign,
}

/// Lexes a digit string and returns its digit values.
///
/// Returns `None` unless every character is a digit whose value is strictly
/// less than `radix`. An empty string yields an empty vector; callers decide
/// whether that is acceptable.
///
/// # Example
/// ```
/// use radix::numeral::lexer::digits_in_radix;
///
/// assert_eq!(digits_in_radix("fF", 16), Some(vec![15, 15]));
/// assert_eq!(digits_in_radix("12", 2), None);
/// assert_eq!(digits_in_radix("1.0", 10), None);
/// ```
#[must_use]
pub fn digits_in_radix(part: &str, radix: u32) -> Option<Vec<u32>> {
    NumeralToken::lexer(part).map(|token| match token {
                                 Ok(NumeralToken::Digit(value)) if value < radix => Some(value),
                                 _ => None,
                             })
                             .collect()
}
