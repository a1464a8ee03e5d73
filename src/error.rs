//! Errors raised while building or reading a token sequence.

use thiserror::Error;

/// Error type for lexer construction and cursor movement.
///
/// Construction errors (everything except `EndOfStream`) mean the input could not
/// be turned into a token sequence at all; the lexer should not be used.
/// `EndOfStream` means a consumer asked for a token past the end of the sequence,
/// and should stop consuming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unknown token type: {0:?}")]
    UnknownTokenKind(String),
    #[error("cannot convert as token: {0}")]
    InvalidConversionTarget(String),
    #[error("invalid token mapping: {0}")]
    InvalidMapping(String),
    #[error("invalid token JSON {text:?}: {reason}")]
    InvalidJsonText { text: String, reason: String },
    #[error("end of token stream")]
    EndOfStream,
}

/// The main result type for this crate.
pub type LexResult<T> = Result<T, LexError>;

impl From<LexError> for std::io::Error {
    fn from(value: LexError) -> Self {
        match value {
            LexError::EndOfStream => {
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, value)
            }
            _ => std::io::Error::new(std::io::ErrorKind::InvalidInput, value),
        }
    }
}
