//! Error types for kcal core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages. Note that slot *reads* never produce an
//! error — absent or corrupt durable data degrades to the caller's
//! default (see [`crate::storage::TrackerStore`]). Only durable writes
//! can fail.

use thiserror::Error;

/// Result type alias for kcal operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Core error type for kcal operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Validation(err.to_string())
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        TrackerError::Storage(format!("SQLite error: {}", err))
    }
}
