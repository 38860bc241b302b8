//! Shared world state for submission review BDD scenarios.

use std::sync::Arc;

use geotag::identity::domain::User;
use geotag::latency::{ImmediateSleeper, LatencyProfile};
use geotag::storage::adapters::InMemoryKeyValueStore;
use geotag::submission::{
    adapters::{KeyValueSubmissionRepository, SequentialRecordIds},
    domain::TapConnectionRecord,
    services::{SubmissionStore, SubmissionStoreError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestSubmissionStore = SubmissionStore<
    KeyValueSubmissionRepository<InMemoryKeyValueStore>,
    SequentialRecordIds,
    DefaultClock,
>;

/// Scenario world for submission review behaviour tests.
pub struct ReviewWorld {
    pub storage: InMemoryKeyValueStore,
    pub store: TestSubmissionStore,
    pub signed_in: Option<User>,
    pub listed: Vec<TapConnectionRecord>,
    pub last_created: Option<TapConnectionRecord>,
    pub last_review_result: Option<Result<TapConnectionRecord, SubmissionStoreError>>,
}

impl ReviewWorld {
    /// Creates a world over empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        let storage = InMemoryKeyValueStore::new();
        let store = SubmissionStore::new(
            Arc::new(KeyValueSubmissionRepository::new(storage.clone())),
            Arc::new(SequentialRecordIds),
            Arc::new(DefaultClock),
        )
        .with_latency(Arc::new(ImmediateSleeper), LatencyProfile::zero());

        Self {
            storage,
            store,
            signed_in: None,
            listed: Vec::new(),
            last_created: None,
            last_review_result: None,
        }
    }
}

impl Default for ReviewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReviewWorld {
    ReviewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
