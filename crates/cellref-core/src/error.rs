//! Error types for cellref-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cellref-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Column letters are empty or contain a non-letter character
    #[error("Invalid column letters: '{0}'")]
    InvalidColumnLetters(String),

    /// Column index is 0 or does not fit in a `u32`
    #[error("Column index {0} out of range (min: 1)")]
    ColumnOutOfRange(u64),

    /// Row index is 0
    #[error("Row index {0} out of range (min: 1)")]
    RowOutOfRange(u64),
}

impl Error {
    /// Whether the error describes malformed input rather than a bad index
    pub fn is_format(&self) -> bool {
        matches!(self, Error::InvalidColumnLetters(_))
    }
}
