//! Composition root wiring settings to storage and services.

use std::path::PathBuf;
use std::sync::Arc;

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;

use crate::config::GeotagSettings;
use crate::identity::{
    adapters::{KeyValueSessionRepository, SeededUserDirectory},
    services::IdentityService,
};
use crate::latency::{Sleeper, TokioSleeper};
use crate::storage::{StorageError, adapters::DirectoryKeyValueStore};
use crate::submission::{
    adapters::{KeyValueSubmissionRepository, SequentialRecordIds},
    services::SubmissionStore,
};

/// Identity service over directory-backed storage.
pub type AppIdentityService =
    IdentityService<SeededUserDirectory, KeyValueSessionRepository<DirectoryKeyValueStore>>;

/// Submission store over directory-backed storage.
pub type AppSubmissionStore = SubmissionStore<
    KeyValueSubmissionRepository<DirectoryKeyValueStore>,
    SequentialRecordIds,
    DefaultClock,
>;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configured data directory is not valid UTF-8.
    #[error("data directory is not valid UTF-8: {}", .0.display())]
    NonUtf8DataDir(PathBuf),
    /// The data directory could not be opened.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Services sharing one durable storage directory.
pub struct GeotagApp {
    storage: DirectoryKeyValueStore,
    identity: AppIdentityService,
    submissions: AppSubmissionStore,
}

impl GeotagApp {
    /// Opens the data directory named by `settings` and builds the services
    /// with real timers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the data directory is unusable.
    pub fn open(settings: &GeotagSettings) -> Result<Self, AppError> {
        Self::open_with_sleeper(settings, Arc::new(TokioSleeper))
    }

    /// Like [`Self::open`] but with a caller-supplied sleeper.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the data directory is unusable.
    pub fn open_with_sleeper(
        settings: &GeotagSettings,
        sleeper: Arc<dyn Sleeper>,
    ) -> Result<Self, AppError> {
        let data_dir = Utf8PathBuf::from_path_buf(settings.data_dir())
            .map_err(AppError::NonUtf8DataDir)?;
        let storage = DirectoryKeyValueStore::open(data_dir)?;
        let latency = settings.latency_profile();

        let identity = IdentityService::new(
            Arc::new(SeededUserDirectory::new()),
            Arc::new(KeyValueSessionRepository::new(storage.clone())),
        )
        .with_latency(Arc::clone(&sleeper), latency.login);
        let submissions = SubmissionStore::new(
            Arc::new(KeyValueSubmissionRepository::new(storage.clone())),
            Arc::new(SequentialRecordIds),
            Arc::new(DefaultClock),
        )
        .with_latency(sleeper, latency)
        .with_seed_on_empty(settings.seed_on_empty());

        info!(data_dir = %storage.root(), "geotag storage opened");
        Ok(Self {
            storage,
            identity,
            submissions,
        })
    }

    /// Returns the identity service.
    #[must_use]
    pub const fn identity(&self) -> &AppIdentityService {
        &self.identity
    }

    /// Returns the submission store.
    #[must_use]
    pub const fn submissions(&self) -> &AppSubmissionStore {
        &self.submissions
    }

    /// Returns the shared storage directory.
    #[must_use]
    pub const fn storage(&self) -> &DirectoryKeyValueStore {
        &self.storage
    }
}
