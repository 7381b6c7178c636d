//! Error types for the library layer.

use std::fmt;

use crate::storage::StorageError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding storage and input validation failures.
#[derive(Debug)]
pub enum TodoAppError {
    /// An error from the underlying API client.
    Api(todo_api::Error),
    /// Persisted state could not be read or written.
    Storage(StorageError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for TodoAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Already user-facing copy.
            Self::Api(e) => write!(f, "{}", e),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::InvalidInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TodoAppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Storage(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<todo_api::Error> for TodoAppError {
    fn from(e: todo_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<StorageError> for TodoAppError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}
