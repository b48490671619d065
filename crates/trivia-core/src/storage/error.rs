//! Storage error handling
//!
//! Provides typed errors for storage operations with descriptive messages
//! and recovery suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to open the database file
    #[error("Failed to open database at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value does not fit the model
    #[error("Invalid stored value in column '{column}': {details}")]
    InvalidValue {
        column: &'static str,
        details: String,
    },

    /// The shared store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,

    /// A blocking store task panicked or was cancelled
    #[error("Store task failed: {0}")]
    Task(String),
}

impl StorageError {
    /// Create an error from an I/O error raised while preparing `path`
    ///
    /// Classifies the error based on its kind.
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            _ => StorageError::CreateDirectory {
                path,
                source: error,
            },
        }
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::PermissionDenied { .. } => {
                Some("Check file and directory permissions, or point TRIVIA_DATA_DIR somewhere writable.")
            }
            StorageError::CreateDirectory { .. } => {
                Some("Check that the parent directory exists and you have write permissions.")
            }
            StorageError::Open { .. } => {
                Some("Make sure no other process holds the database and the file is a SQLite database.")
            }
            StorageError::Poisoned | StorageError::Task(_) => Some("Restart the server."),
            _ => None,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
