//! Error types for touchcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding an A1-style coordinate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Text does not match `[A-Z]+[0-9]+`
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Digit run does not fit a row number
    #[error("invalid row number in coordinate: {0}")]
    InvalidRow(String),

    /// Column letters do not fit a column number
    #[error("column out of range in coordinate: {0}")]
    ColumnOverflow(String),
}

/// Structural problems found in an expanded document
///
/// Line numbers are 1-based and count every input line, blank ones included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No `version:` record anywhere in the document
    #[error("missing version header")]
    MissingVersion,

    /// A `cell:` record with fewer than four fields
    #[error("invalid cell definition at line {line}: {text}")]
    MalformedCell { line: usize, text: String },

    /// A `cell:` record whose coordinate field is not A1-style
    #[error("invalid coordinate at line {line}: {text}")]
    InvalidCoordinate { line: usize, text: String },
}

impl ValidationError {
    /// Line number the error refers to, if it refers to one
    pub fn line(&self) -> Option<usize> {
        match self {
            ValidationError::MissingVersion => None,
            ValidationError::MalformedCell { line, .. }
            | ValidationError::InvalidCoordinate { line, .. } => Some(*line),
        }
    }
}

/// Errors that can occur in touchcalc-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Coordinate decoding failed
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Document validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
