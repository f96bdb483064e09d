//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.

use thiserror::Error;

/// Main error type for tuple-encoding operations
#[derive(Error, Debug)]
pub enum PecError {
    /// Invalid argument passed to a validating setter (zero charge,
    /// mother index below -1). The record is left unchanged.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A fixed-capacity arena or column buffer ran out of slots
    #[error("Capacity exceeded: {collection} holds at most {capacity} entries")]
    Capacity {
        collection: &'static str,
        capacity: usize,
    },

    /// Configuration errors (zero capacities, inconsistent flags)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Errors reported by a tuple writer implementation
    #[error("Writer error: {message}")]
    Writer { message: String },

    /// I/O errors from report printing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using PecError
pub type Result<T> = std::result::Result<T, PecError>;

impl PecError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a capacity error for a named collection
    pub fn capacity(collection: &'static str, capacity: usize) -> Self {
        Self::Capacity {
            collection,
            capacity,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a writer error
    pub fn writer(message: impl Into<String>) -> Self {
        Self::Writer {
            message: message.into(),
        }
    }
}
