/// Number of symbols in the digit alphabet, and so the largest radix.
pub const ALPHABET_LEN: u32 = 36;

const SYMBOLS: &[u8; ALPHABET_LEN as usize] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Returns the value of a digit symbol.
///
/// `'0'..='9'` map to `0..=9` and letters map to `10..=35`, ignoring case.
/// Any other character has no value.
///
/// # Example
/// ```
/// use radix::numeral::digit::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('f'), Some(15));
/// assert_eq!(digit_value('Z'), Some(35));
/// assert_eq!(digit_value('.'), None);
/// ```
#[must_use]
pub const fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Returns the lowercase symbol for a digit value, or `None` past `35`.
///
/// # Example
/// ```
/// use radix::numeral::digit::digit_char;
///
/// assert_eq!(digit_char(10), Some('a'));
/// assert_eq!(digit_char(36), None);
/// ```
#[must_use]
pub fn digit_char(value: u32) -> Option<char> {
    SYMBOLS.get(usize::try_from(value).ok()?).map(|&b| char::from(b))
}
