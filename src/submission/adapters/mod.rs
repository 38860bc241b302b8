//! Adapter implementations for submission ports.

pub mod ids;
pub mod storage;

pub use ids::{RandomRecordIds, SequentialRecordIds};
pub use storage::{KeyValueSubmissionRepository, RECORDS_BACKUP_KEY, RECORDS_KEY};
