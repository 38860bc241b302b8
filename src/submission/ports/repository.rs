//! Repository port for the persisted record list.

use crate::storage::StorageError;
use crate::submission::domain::TapConnectionRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for submission repository operations.
pub type SubmissionRepositoryResult<T> = Result<T, SubmissionRepositoryError>;

/// State of the persisted record document.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredRecords {
    /// Nothing has been written yet.
    Absent,
    /// The decodable records, in storage order.
    ///
    /// Individual records that do not decode are left out; adapters keep
    /// a copy of the original document before anything is dropped.
    Loaded(Vec<TapConnectionRecord>),
    /// The document exists but is not a JSON array.
    Unreadable {
        /// Parser diagnostic.
        reason: String,
    },
}

/// Whole-document persistence contract for the record list.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Reads the full record list.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRepositoryError::Storage`] when storage is
    /// unavailable.
    async fn load(&self) -> SubmissionRepositoryResult<StoredRecords>;

    /// Replaces the full record list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRepositoryError`] when the list cannot be encoded
    /// or written.
    async fn save(&self, records: &[TapConnectionRecord]) -> SubmissionRepositoryResult<()>;
}

/// Errors returned by submission repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SubmissionRepositoryError {
    /// The underlying key-value storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The record list could not be encoded.
    #[error("record serialization error: {0}")]
    Serialization(String),
}
