//! Session repository persisted in key-value storage.

use async_trait::async_trait;
use tracing::warn;

use crate::identity::{
    domain::User,
    ports::{SessionRepository, SessionRepositoryError, SessionRepositoryResult},
};
use crate::storage::KeyValueStore;

/// Storage key holding the JSON-encoded current user.
pub const SESSION_KEY: &str = "geotag_auth_user";

/// Session repository writing the current user under [`SESSION_KEY`].
#[derive(Debug, Clone)]
pub struct KeyValueSessionRepository<S> {
    store: S,
}

impl<S> KeyValueSessionRepository<S>
where
    S: KeyValueStore,
{
    /// Creates a repository over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SessionRepository for KeyValueSessionRepository<S>
where
    S: KeyValueStore,
{
    async fn load(&self) -> SessionRepositoryResult<Option<User>> {
        let Some(bytes) = self.store.get(SESSION_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_slice::<User>(&bytes) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!(key = SESSION_KEY, error = %err, "ignoring unreadable session");
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &User) -> SessionRepositoryResult<()> {
        let bytes = serde_json::to_vec(user)
            .map_err(|err| SessionRepositoryError::Serialization(err.to_string()))?;
        self.store.set(SESSION_KEY, &bytes).await?;
        Ok(())
    }

    async fn clear(&self) -> SessionRepositoryResult<()> {
        self.store.remove(SESSION_KEY).await?;
        Ok(())
    }
}
