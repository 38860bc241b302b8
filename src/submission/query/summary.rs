//! Aggregate counts for dashboard tiles.

use crate::submission::domain::{TapConnectionRecord, TapStatus};

/// Record totals per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusCounts {
    /// All records.
    pub total: usize,
    /// Records awaiting review.
    pub pending: usize,
    /// Approved records.
    pub approved: usize,
    /// Rejected records.
    pub rejected: usize,
}

impl StatusCounts {
    /// Counts `records` in a single pass.
    #[must_use]
    pub fn tally(records: &[TapConnectionRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            counts.total += 1;
            match record.status() {
                TapStatus::Pending => counts.pending += 1,
                TapStatus::Approved => counts.approved += 1,
                TapStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
    }

    /// Returns the count for one status.
    #[must_use]
    pub const fn count(&self, status: TapStatus) -> usize {
        match status {
            TapStatus::Pending => self.pending,
            TapStatus::Approved => self.approved,
            TapStatus::Rejected => self.rejected,
        }
    }
}
