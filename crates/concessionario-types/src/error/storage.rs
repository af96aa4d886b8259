//! Durable storage errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a session storage backend.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum StorageError {
    /// The backend is not available (no window, private mode, missing directory)
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Description of why the backend cannot be reached
        message: String,
    },

    /// Reading or writing an entry failed
    #[error("Storage access failed for '{key}': {message}")]
    Access {
        /// Entry being read or written
        key: String,
        /// Backend-provided failure description
        message: String,
    },

    /// A stored entry exists but cannot be decoded
    #[error("Corrupted storage entry '{key}': {message}")]
    Corrupted {
        /// Entry that failed to decode
        key: String,
        /// Decoder message
        message: String,
    },
}

impl StorageError {
    /// Shorthand for an access failure on `key`.
    pub fn access(key: &str, message: impl Into<String>) -> Self {
        Self::Access { key: key.to_string(), message: message.into() }
    }
}
