//! Storage error types.
//!
//! Used by the repository and callers of storage APIs. Storage faults are never
//! swallowed; they surface here and abort the current handler invocation.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}
