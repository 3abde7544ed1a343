/// Result type used throughout the converter.
///
/// Every fallible stage returns either a value of type `T` or a
/// `ConvertError` describing why the run has to stop.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during a conversion run.
pub enum ConvertError {
    /// A radix token was not an integer, or was outside `1..=36`.
    InvalidRadix {
        /// The token as it was read.
        token: String,
    },
    /// The number token contains a digit that is not valid in the source
    /// radix, is malformed, or exceeds the native integer range.
    InvalidNumber {
        /// The token as it was read.
        token: String,
    },
    /// The input ended before all three tokens were read.
    MissingToken {
        /// Which token was expected next.
        expected: &'static str,
    },
    /// A unary rendering would need more symbols than can be addressed.
    UnaryTooLong {
        /// The value that was to be written in base 1.
        value: u64,
    },
}

impl ConvertError {
    /// Builds an [`ConvertError::InvalidRadix`] for `token`.
    pub fn invalid_radix(token: &str) -> Self {
        Self::InvalidRadix { token: token.to_string() }
    }

    /// Builds an [`ConvertError::InvalidNumber`] for `token`.
    pub fn invalid_number(token: &str) -> Self {
        Self::InvalidNumber { token: token.to_string() }
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRadix { token } => {
                write!(f, "Error! Radix: [{token}] must be a number between 1 and 36, inclusive.")
            },

            Self::InvalidNumber { token } => {
                write!(f, "Error! [{token}] is not a valid number in the source radix.")
            },

            Self::MissingToken { expected } => write!(f, "Error! Missing {expected} in input."),

            Self::UnaryTooLong { value } => {
                write!(f, "Error! [{value}] is too large to be written in radix 1.")
            },
        }
    }
}

impl std::error::Error for ConvertError {}
