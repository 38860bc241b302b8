//! Record reference generators.

use uuid::Uuid;

use crate::submission::{
    domain::{RecordId, TapConnectionRecord},
    ports::RecordIdSource,
};

/// Base offset for sequential references; the first record is `TC-1001`.
const SEQUENCE_BASE: u64 = 1000;

/// Issues `TC-<n>` references one past the larger of `1000 + count` and the
/// highest existing numeric suffix.
///
/// On a store whose references were all issued sequentially this yields
/// `TC-(1000 + count + 1)`; it never reuses a reference already present.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialRecordIds;

impl RecordIdSource for SequentialRecordIds {
    fn next_id(&self, existing: &[TapConnectionRecord]) -> RecordId {
        let count = u64::try_from(existing.len()).unwrap_or(u64::MAX);
        let highest = existing
            .iter()
            .filter_map(|record| record.id().sequence_number())
            .max()
            .unwrap_or(0);
        let next = SEQUENCE_BASE
            .saturating_add(count)
            .max(highest)
            .saturating_add(1);
        RecordId::from_sequence(next)
    }
}

/// Issues `TC-<uuid>` references from random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRecordIds;

impl RecordIdSource for RandomRecordIds {
    fn next_id(&self, _existing: &[TapConnectionRecord]) -> RecordId {
        RecordId::new(format!("TC-{}", Uuid::new_v4().simple()))
    }
}
