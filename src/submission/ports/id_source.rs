//! Port for assigning record references.

use crate::submission::domain::{RecordId, TapConnectionRecord};

/// Source of unique record references.
pub trait RecordIdSource: Send + Sync {
    /// Returns a reference not used by any record in `existing`.
    fn next_id(&self, existing: &[TapConnectionRecord]) -> RecordId;
}
