/// The converter module turns a validated number into its target digits.
///
/// Conversion goes through a native intermediate: source digits are first
/// normalised to an integer and a floating-point fraction, which are then
/// rendered in the target radix.
///
/// # Responsibilities
/// - Owns the immutable `Converter` built from validated input.
/// - Normalises source digits, including unary counting.
/// - Renders integers and truncated five-digit fractions.
pub mod converter;
/// The digit alphabet `0-9a-z`, mapping symbols to values and back.
pub mod digit;
/// The lexer module tokenizes number literals.
///
/// Splits a literal into single-digit tokens and radix points using `logos`,
/// so every digit value can be checked against the source radix.
pub mod lexer;
/// Splitting and validation of raw number tokens.
pub mod parser;
/// The `Radix` type, bounded to `1..=36`.
pub mod radix;
/// Parsed number representations shared between stages.
pub mod value;
