//! Directory-backed key-value store.
//!
//! Each key maps to one file named after the key inside a single directory.
//! Access is confined to that directory through `cap-std`.

use async_trait::async_trait;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use tracing::debug;

use super::atomic_io::write_atomic;
use crate::storage::ports::{KeyValueStore, StorageError, StorageResult};

/// Key-value store persisting one file per key under a directory.
#[derive(Debug, Clone)]
pub struct DirectoryKeyValueStore {
    root: Utf8PathBuf,
    dir: Arc<Dir>,
}

impl DirectoryKeyValueStore {
    /// Opens (creating if needed) the store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(root: impl Into<Utf8PathBuf>) -> StorageResult<Self> {
        let root_path = root.into();
        std::fs::create_dir_all(root_path.as_std_path())
            .map_err(|err| StorageError::unavailable(root_path.as_str(), err))?;
        let dir = Dir::open_ambient_dir(&root_path, ambient_authority())
            .map_err(|err| StorageError::unavailable(root_path.as_str(), err))?;
        Ok(Self {
            root: root_path,
            dir: Arc::new(dir),
        })
    }

    /// Returns the directory backing this store.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

/// Accepts keys that name a single, visible file inside the store directory.
fn validate_key(key: &str) -> StorageResult<&str> {
    let mut components = Utf8Path::new(key).components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) if !name.starts_with('.') => Ok(name),
        _ => Err(StorageError::InvalidKey(key.to_owned())),
    }
}

/// Runs a blocking filesystem operation off the async executor.
async fn run_blocking<F, T>(key: &str, f: F) -> StorageResult<T>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| StorageError::unavailable(key, io::Error::other(err.to_string())))?
        .map_err(|err| StorageError::unavailable(key, err))
}

#[async_trait]
impl KeyValueStore for DirectoryKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let file_name = validate_key(key)?.to_owned();
        let dir = Arc::clone(&self.dir);
        let value = run_blocking(key, move || match dir.read(&file_name) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        })
        .await?;
        debug!(key, found = value.is_some(), "read storage key");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let file_name = validate_key(key)?.to_owned();
        let dir = Arc::clone(&self.dir);
        let contents = value.to_vec();
        let len = contents.len();
        run_blocking(key, move || write_atomic(&dir, &file_name, &contents)).await?;
        debug!(key, bytes = len, "wrote storage key");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let file_name = validate_key(key)?.to_owned();
        let dir = Arc::clone(&self.dir);
        run_blocking(key, move || match dir.remove_file(&file_name) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        })
        .await?;
        debug!(key, "removed storage key");
        Ok(())
    }
}
