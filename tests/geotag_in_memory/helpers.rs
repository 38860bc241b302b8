//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use geotag::identity::{
    adapters::{KeyValueSessionRepository, SeededUserDirectory},
    domain::User,
    services::IdentityService,
};
use geotag::latency::{ImmediateSleeper, LatencyProfile};
use geotag::storage::adapters::InMemoryKeyValueStore;
use geotag::submission::{
    adapters::{KeyValueSubmissionRepository, SequentialRecordIds},
    services::{CreateSubmissionRequest, SubmissionStore},
};
use mockable::Clock;
use rstest::fixture;

/// Smallest valid embedded PNG reference.
pub const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Identity service over shared in-memory storage.
pub type TestIdentity =
    IdentityService<SeededUserDirectory, KeyValueSessionRepository<InMemoryKeyValueStore>>;

/// Submission store over shared in-memory storage.
pub type TestStore = SubmissionStore<
    KeyValueSubmissionRepository<InMemoryKeyValueStore>,
    SequentialRecordIds,
    FixtureClock,
>;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock(pub DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Both services sharing one storage profile.
pub struct Profile {
    pub storage: InMemoryKeyValueStore,
    pub identity: TestIdentity,
    pub store: TestStore,
}

impl Profile {
    /// Builds fresh services over `storage`, as a restarted process would.
    #[must_use]
    pub fn reopen(storage: InMemoryKeyValueStore) -> Self {
        let identity = IdentityService::new(
            Arc::new(SeededUserDirectory::new()),
            Arc::new(KeyValueSessionRepository::new(storage.clone())),
        )
        .with_latency(Arc::new(ImmediateSleeper), LatencyProfile::zero().login);
        let store = SubmissionStore::new(
            Arc::new(KeyValueSubmissionRepository::new(storage.clone())),
            Arc::new(SequentialRecordIds),
            Arc::new(FixtureClock(reference_instant())),
        )
        .with_latency(Arc::new(ImmediateSleeper), LatencyProfile::zero());
        Self {
            storage,
            identity,
            store,
        }
    }
}

/// Reference instant for captured timestamps.
///
/// # Panics
///
/// Panics if the hard-coded instant is invalid.
#[must_use]
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("reference instant should be valid")
}

/// Provides services over empty storage.
#[fixture]
pub fn profile() -> Profile {
    Profile::reopen(InMemoryKeyValueStore::new())
}

/// Builds a complete capture request for `user`.
#[must_use]
pub fn capture_request(user: &User, household_id: &str, village: &str) -> CreateSubmissionRequest {
    CreateSubmissionRequest::for_user(user, household_id, village)
        .at(26.9, 75.8)
        .with_photos(TINY_PNG, TINY_PNG)
}

/// Signs `username` in, failing the test when the account is unknown.
///
/// # Errors
///
/// Returns an error when login fails or the account does not exist.
pub async fn sign_in(profile: &Profile, username: &str) -> Result<User, eyre::Report> {
    profile
        .identity
        .login(username)
        .await?
        .ok_or_else(|| eyre::eyre!("no seeded account named {username}"))
}
