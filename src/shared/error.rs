//! Shared Error Types
//!
//! Errors that are independent of the UI and the HTTP client.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `Validation` - Client-side form validation failures
//! - `Storage` - Local persistence failures (session file)
//!
//! # Usage
//!
//! ```rust
//! use factual::shared::error::SharedError;
//! use factual::shared::validation::ValidationError;
//!
//! let error = SharedError::from(ValidationError::InvalidEmail);
//! assert!(error.to_string().contains("valid email"));
//! ```
use thiserror::Error;

use crate::shared::validation::ValidationError;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Form validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Local storage error
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for SharedError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}
