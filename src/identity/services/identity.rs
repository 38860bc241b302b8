//! Service layer for login, logout and session lookup.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::identity::{
    domain::{RouteDecision, User, resolve_route},
    ports::{SessionRepository, SessionRepositoryError, UserDirectory},
};
use crate::latency::{LatencyProfile, Sleeper, TokioSleeper};

/// Service-level errors for identity operations.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Session persistence failed.
    #[error(transparent)]
    Session(#[from] SessionRepositoryError),
}

/// Result type for identity service operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Sign-in orchestration service.
#[derive(Clone)]
pub struct IdentityService<D, R>
where
    D: UserDirectory,
    R: SessionRepository,
{
    directory: Arc<D>,
    sessions: Arc<R>,
    sleeper: Arc<dyn Sleeper>,
    login_latency: Duration,
}

impl<D, R> IdentityService<D, R>
where
    D: UserDirectory,
    R: SessionRepository,
{
    /// Creates a service with the default simulated login delay.
    #[must_use]
    pub fn new(directory: Arc<D>, sessions: Arc<R>) -> Self {
        Self {
            directory,
            sessions,
            sleeper: Arc::new(TokioSleeper),
            login_latency: LatencyProfile::default().login,
        }
    }

    /// Replaces the sleeper and login delay.
    #[must_use]
    pub fn with_latency(mut self, sleeper: Arc<dyn Sleeper>, login_latency: Duration) -> Self {
        self.sleeper = sleeper;
        self.login_latency = login_latency;
        self
    }

    /// Signs in by login name.
    ///
    /// Returns `Ok(None)` when no account matches; presenting "invalid
    /// credentials" is left to the caller. On a match the user becomes the
    /// persisted current session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Session`] when the session cannot be
    /// persisted.
    pub async fn login(&self, username: &str) -> IdentityResult<Option<User>> {
        self.sleeper.sleep(self.login_latency).await;

        let Some(user) = self.directory.find_by_username(username).await else {
            info!(username, "login rejected: unknown account");
            return Ok(None);
        };
        self.sessions.save(&user).await?;
        info!(user_id = %user.id(), role = %user.role(), "user signed in");
        Ok(Some(user))
    }

    /// Clears the persisted session. Logging out twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Session`] when storage is unavailable.
    pub async fn logout(&self) -> IdentityResult<()> {
        self.sessions.clear().await?;
        info!("session cleared");
        Ok(())
    }

    /// Returns the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Session`] when storage is unavailable.
    pub async fn current_session(&self) -> IdentityResult<Option<User>> {
        Ok(self.sessions.load().await?)
    }

    /// Resolves a navigation path against the persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Session`] when storage is unavailable.
    pub async fn resolve(&self, path: &str) -> IdentityResult<RouteDecision> {
        let session = self.current_session().await?;
        Ok(resolve_route(session.as_ref(), path))
    }
}
