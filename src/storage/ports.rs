//! Port contract for durable key-value storage.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable key-value storage holding whole documents per key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backing store cannot be
    /// read, or [`StorageError::InvalidKey`] when the adapter cannot address
    /// the key.
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the write fails (for
    /// example when the medium is full or read-only).
    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backing store rejects
    /// the removal.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

#[async_trait]
impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key).await
    }
}

/// Errors returned by key-value storage adapters.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The backing store could not be accessed.
    #[error("storage unavailable for key '{key}': {cause}")]
    Unavailable {
        /// Key being accessed when the failure occurred.
        key: String,
        /// Underlying adapter failure.
        cause: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The key cannot be addressed by this adapter.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    /// Wraps an adapter failure for `key`.
    pub fn unavailable(
        key: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Unavailable {
            key: key.into(),
            cause: Arc::new(err),
        }
    }
}
