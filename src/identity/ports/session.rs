//! Repository port for the persisted current session.

use crate::identity::domain::User;
use crate::storage::StorageError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for session repository operations.
pub type SessionRepositoryResult<T> = Result<T, SessionRepositoryError>;

/// Persistence contract for the signed-in user.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the persisted session.
    ///
    /// Returns `None` when no session is stored or the stored document
    /// cannot be parsed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::Storage`] when storage is
    /// unavailable.
    async fn load(&self) -> SessionRepositoryResult<Option<User>>;

    /// Persists `user` as the current session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError`] when the user cannot be encoded or
    /// written.
    async fn save(&self, user: &User) -> SessionRepositoryResult<()>;

    /// Clears the current session. Clearing an empty session succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionRepositoryError::Storage`] when storage is
    /// unavailable.
    async fn clear(&self) -> SessionRepositoryResult<()>;
}

/// Errors returned by session repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionRepositoryError {
    /// The underlying key-value storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The session document could not be encoded.
    #[error("session serialization error: {0}")]
    Serialization(String),
}
