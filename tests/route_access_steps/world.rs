//! Shared world state for route access BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use geotag::identity::{
    adapters::{KeyValueSessionRepository, SeededUserDirectory},
    domain::RouteDecision,
    services::IdentityService,
};
use geotag::latency::ImmediateSleeper;
use geotag::storage::adapters::InMemoryKeyValueStore;
use rstest::fixture;

/// Identity service type used by the BDD world.
pub type TestIdentityService =
    IdentityService<SeededUserDirectory, KeyValueSessionRepository<InMemoryKeyValueStore>>;

/// Scenario world for route access behaviour tests.
pub struct AccessWorld {
    pub storage: InMemoryKeyValueStore,
    pub service: TestIdentityService,
    pub last_decision: Option<RouteDecision>,
}

impl AccessWorld {
    /// Creates a world with no stored session.
    #[must_use]
    pub fn new() -> Self {
        let storage = InMemoryKeyValueStore::new();
        let service = IdentityService::new(
            Arc::new(SeededUserDirectory::new()),
            Arc::new(KeyValueSessionRepository::new(storage.clone())),
        )
        .with_latency(Arc::new(ImmediateSleeper), Duration::ZERO);

        Self {
            storage,
            service,
            last_decision: None,
        }
    }
}

impl Default for AccessWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AccessWorld {
    AccessWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
