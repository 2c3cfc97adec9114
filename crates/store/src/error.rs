//! Store error model.

use recordkit_core::ExternalId;
use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store operation error.
///
/// These are infrastructure errors (uniqueness, addressing, key ledger) as
/// opposed to the convention's own [`recordkit_core::CoreError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Uniqueness violation on the public identifier. Fatal to the operation;
    /// surfaced unchanged to the caller.
    #[error("duplicate external id: {0}")]
    DuplicateExternalId(ExternalId),

    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,

    /// Key-ledger inconsistency (e.g. a surrogate key bound outside insert).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
