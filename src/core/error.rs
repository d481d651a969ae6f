use thiserror::Error;

/// Returned in place of number words when the input is not numeric.
pub const NOT_A_NUMBER: &str = "Eingabe ist keine Zahl.";

/// Returned in place of number words when the input exceeds the largest band.
pub const TOO_LARGE: &str = "Zahl zu groß.";

/// Why a value could not be written out in words.
///
/// The `Display` text of each variant is the fixed German sentence that
/// [`number_to_words_german`](super::number_to_words_german) returns instead
/// of the words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberWordsError {
    /// Input is neither an integer, a decimal nor a numeric string.
    #[error("{}", NOT_A_NUMBER)]
    NotANumber {
        /// The rejected input, as received.
        input: String,
    },

    /// Absolute value is 10^12 or larger.
    #[error("{}", TOO_LARGE)]
    TooLarge,
}

/// Errors raised by the helper modules.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HelperError {
    /// A number could not be converted to words.
    #[error("number words: {0}")]
    NumberWords(#[from] NumberWordsError),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[cfg(any(feature = "collections", feature = "json", feature = "crash"))]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A path or path component was rejected.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}
