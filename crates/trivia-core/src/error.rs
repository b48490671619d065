//! Operation errors
//!
//! Every operation in [`crate::service`] fails with a [`TriviaError`]. The
//! server maps [`ErrorKind`] to a status code; nothing in this crate knows
//! about HTTP.

use thiserror::Error;

use crate::storage::StorageError;

/// Classification of a failure, independent of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input
    InvalidArgument,
    /// Referenced question or category does not exist
    NotFound,
    /// Page requested past the end of the data
    OutOfRange,
    /// Unexpected store failure
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Errors returned by trivia operations
#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Page {page} is out of range ({total} questions)")]
    OutOfRange { page: u32, total: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TriviaError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TriviaError::InvalidArgument(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            TriviaError::NotFound { .. } => ErrorKind::NotFound,
            TriviaError::OutOfRange { .. } => ErrorKind::OutOfRange,
            TriviaError::Storage(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for trivia operations
pub type TriviaResult<T> = Result<T, TriviaError>;
