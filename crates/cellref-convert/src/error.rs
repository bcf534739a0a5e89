//! Conversion error types

use std::fmt;
use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// The reference notation an error was raised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Column letters + row digits, e.g. `$B$7`
    A1,
    /// Row/column markers with numbers, e.g. `R[-1]C2`
    R1C1,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::A1 => f.write_str("A1"),
            Notation::R1C1 => f.write_str("R1C1"),
        }
    }
}

/// Errors that can occur while converting a reference or a formula
///
/// Both kinds abort the current conversion. A formula with one bad
/// reference produces no output at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input does not match the reference grammar
    #[error("Invalid {notation} reference: '{input}'")]
    Format { notation: Notation, input: String },

    /// The input is well-formed but resolves to a row or column below 1
    #[error("{notation} reference '{input}' out of range")]
    Range { notation: Notation, input: String },
}

impl ConvertError {
    pub(crate) fn format(notation: Notation, input: &str) -> Self {
        ConvertError::Format {
            notation,
            input: input.to_string(),
        }
    }

    pub(crate) fn range(notation: Notation, input: &str) -> Self {
        ConvertError::Range {
            notation,
            input: input.to_string(),
        }
    }

    /// Whether this is a grammar error
    pub fn is_format(&self) -> bool {
        matches!(self, ConvertError::Format { .. })
    }

    /// Whether this is an out-of-range error
    pub fn is_range(&self) -> bool {
        matches!(self, ConvertError::Range { .. })
    }

    /// The offending input text
    pub fn input(&self) -> &str {
        match self {
            ConvertError::Format { input, .. } | ConvertError::Range { input, .. } => input,
        }
    }
}
