//! Error types for Oxbow operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! the crate. Uses `thiserror` for derive macros.

use thiserror::Error;

/// Errors that can occur in Oxbow operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Month index outside the 1..=12 calendar range.
    #[error("month index out of range: {0} (expected 1..=12)")]
    MonthOutOfRange(u32),

    /// Timestamp that cannot be represented as a date.
    #[error("invalid timestamp: {0} ms")]
    InvalidTimestamp(i64),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Content not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type alias using Oxbow's Error type.
pub type Result<T> = std::result::Result<T, Error>;
