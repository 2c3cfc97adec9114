//! Core error model.

use thiserror::Error;

/// Result type used across the convention layer.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors the convention itself can produce.
///
/// Keep this focused on what this crate owns. Storage failures (uniqueness
/// violations, missing records) belong to the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CoreError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
