//! Time-ordered selections: recent activity and the pipeline path.

use crate::submission::domain::{TapConnectionRecord, TapStatus};

/// Number of records shown in the dashboard's recent-activity panel.
pub const DASHBOARD_RECENT_LIMIT: usize = 5;

/// Returns up to `limit` records, newest capture first.
#[must_use]
pub fn most_recent(records: &[TapConnectionRecord], limit: usize) -> Vec<&TapConnectionRecord> {
    let mut recent: Vec<_> = records.iter().collect();
    recent.sort_by(|left, right| right.captured_at().cmp(&left.captured_at()));
    recent.truncate(limit);
    recent
}

/// Returns the records joined by the map's pipeline line, oldest first.
///
/// Approved records are always included and pending ones only when
/// `include_pending` is set. Rejected records never are.
#[must_use]
pub fn pipeline_path(
    records: &[TapConnectionRecord],
    include_pending: bool,
) -> Vec<&TapConnectionRecord> {
    let mut path: Vec<_> = records
        .iter()
        .filter(|record| match record.status() {
            TapStatus::Approved => true,
            TapStatus::Pending => include_pending,
            TapStatus::Rejected => false,
        })
        .collect();
    path.sort_by_key(|record| record.captured_at());
    path
}
