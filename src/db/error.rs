//! Key-value store error types
//!
//! This module defines the errors a preference backend can report. None of
//! them reach the user: the preference layer logs and swallows them.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`Unavailable`**: The store refuses reads or writes (disabled, quota exceeded)
//! - **`InvalidValue`**: A stored value is not valid UTF-8

use thiserror::Error;

/// Key-value store errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Storage is disabled or full
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Stored bytes could not be read back as a string
    #[error("Invalid value for key '{key}'")]
    InvalidValue {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
