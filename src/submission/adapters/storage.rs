//! Record list persisted as one JSON array in key-value storage.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::storage::KeyValueStore;
use crate::submission::{
    domain::TapConnectionRecord,
    ports::{
        StoredRecords, SubmissionRepository, SubmissionRepositoryError, SubmissionRepositoryResult,
    },
};

/// Storage key holding the JSON-encoded record list.
pub const RECORDS_KEY: &str = "geotag_taps";

/// Storage key receiving a copy of a document that could not be fully
/// decoded, written before any of its records are dropped.
pub const RECORDS_BACKUP_KEY: &str = "geotag_taps_unreadable";

/// Submission repository writing the record list under [`RECORDS_KEY`].
#[derive(Debug, Clone)]
pub struct KeyValueSubmissionRepository<S> {
    store: S,
}

impl<S> KeyValueSubmissionRepository<S>
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
impl<S> SubmissionRepository for KeyValueSubmissionRepository<S>
where
    S: KeyValueStore,
{
    async fn load(&self) -> SubmissionRepositoryResult<StoredRecords> {
        let Some(bytes) = self.store.get(RECORDS_KEY).await? else {
            return Ok(StoredRecords::Absent);
        };
        let entries = match serde_json::from_slice::<Vec<Value>>(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                self.store.set(RECORDS_BACKUP_KEY, &bytes).await?;
                return Ok(StoredRecords::Unreadable {
                    reason: err.to_string(),
                });
            }
        };

        let total = entries.len();
        let records: Vec<TapConnectionRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| decode_record(index, entry))
            .collect();
        let skipped = total.saturating_sub(records.len());
        if skipped > 0 {
            self.store.set(RECORDS_BACKUP_KEY, &bytes).await?;
            warn!(
                skipped,
                backup_key = RECORDS_BACKUP_KEY,
                "skipped undecodable records; original document backed up"
            );
        }
        debug!(count = records.len(), "loaded record list");
        Ok(StoredRecords::Loaded(records))
    }

    async fn save(&self, records: &[TapConnectionRecord]) -> SubmissionRepositoryResult<()> {
        let bytes = serde_json::to_vec(records)
            .map_err(|err| SubmissionRepositoryError::Serialization(err.to_string()))?;
        self.store.set(RECORDS_KEY, &bytes).await?;
        debug!(count = records.len(), "saved record list");
        Ok(())
    }
}

fn decode_record(index: usize, entry: Value) -> Option<TapConnectionRecord> {
    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("<missing>")
        .to_owned();
    match serde_json::from_value(entry) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(index, record_id = %id, error = %err, "skipping undecodable record");
            None
        }
    }
}
