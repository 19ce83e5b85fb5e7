//! Review log error types.

use thiserror::Error;

/// Failures reported by a [`Storage`](crate::platform::Storage) backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage is reachable (private mode, disabled, no window).
    #[error("storage unavailable")]
    Unavailable,

    /// The write did not fit in the remaining quota.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// Any other backend failure, with the backend's description.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors surfaced by the fallible store operations.
///
/// The recovering wrappers on [`ReviewStore`](crate::store::ReviewStore) log
/// these and carry on; only `try_load`/`try_save` hand them to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the underlying storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The stored value is not valid JSON for a review collection.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Rejections at the submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The message was empty or whitespace only.
    #[error("review message is empty")]
    EmptyMessage,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
