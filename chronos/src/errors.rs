use thiserror::Error;

/// Errors returned when parsing a chronos string.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("chronos string is empty")]
    Empty,
    #[error("chronos string is too long, expected at most 4 digits but got {0}")]
    TooLong(usize),
    #[error("invalid hex digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },
}
