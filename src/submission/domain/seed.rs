//! Demonstration records written to empty storage.

use chrono::{DateTime, TimeDelta, Utc};

use super::{
    GeoPoint, PersistedRecordData, PhotoRef, RecordId, RejectionReason, TapConnectionRecord,
    TapStatus,
};
use crate::identity::domain::UserId;

/// Number of records in the demonstration dataset.
pub const SEED_RECORD_COUNT: usize = 13;

struct SeedRow {
    sequence: u64,
    household_id: &'static str,
    village: &'static str,
    latitude: f64,
    longitude: f64,
    hours_ago: i64,
    status: TapStatus,
}

const fn row(
    sequence: u64,
    household_id: &'static str,
    village: &'static str,
    coordinates: (f64, f64),
    hours_ago: i64,
    status: TapStatus,
) -> SeedRow {
    SeedRow {
        sequence,
        household_id,
        village,
        latitude: coordinates.0,
        longitude: coordinates.1,
        hours_ago,
        status,
    }
}

const RAMPUR: &str = "Rampur";
const SEED_REJECTION_REASON: &str = "Duplicate entry";
const GOPALPURA: &str = "Gopalpura";

const SEED_ROWS: [SeedRow; SEED_RECORD_COUNT] = [
    row(1001, "HH-204", RAMPUR, (26.814, 75.802), 240, TapStatus::Approved),
    row(1002, "HH-205", RAMPUR, (26.8145, 75.8025), 216, TapStatus::Approved),
    row(1003, "HH-206", RAMPUR, (26.815, 75.803), 192, TapStatus::Approved),
    row(1004, "HH-207", RAMPUR, (26.8155, 75.8035), 168, TapStatus::Approved),
    row(1005, "HH-208", RAMPUR, (26.816, 75.804), 144, TapStatus::Pending),
    row(1006, "HH-209", RAMPUR, (26.8165, 75.8045), 120, TapStatus::Approved),
    row(1007, "HH-210", RAMPUR, (26.817, 75.805), 108, TapStatus::Pending),
    row(1008, "HH-211", RAMPUR, (26.8175, 75.8055), 96, TapStatus::Approved),
    row(1009, "HH-305", GOPALPURA, (26.82, 75.81), 72, TapStatus::Rejected),
    row(1010, "HH-306", GOPALPURA, (26.821, 75.8105), 60, TapStatus::Pending),
    row(1011, "HH-307", GOPALPURA, (26.822, 75.811), 48, TapStatus::Approved),
    row(1012, "HH-308", GOPALPURA, (26.823, 75.8115), 24, TapStatus::Approved),
    row(1013, "HH-309", GOPALPURA, (26.824, 75.812), 0, TapStatus::Approved),
];

/// Builds the demonstration dataset relative to `now`.
///
/// Records are returned oldest first, `TC-1001` to `TC-1013`, all captured
/// by the seeded field worker in Sanganer block, Jaipur district.
#[must_use]
pub fn seed_records(now: DateTime<Utc>) -> Vec<TapConnectionRecord> {
    SEED_ROWS
        .iter()
        .zip(1_u64..)
        .map(|(seed, photo_index)| {
            let rejected = seed.status == TapStatus::Rejected;
            TapConnectionRecord::from_persisted(PersistedRecordData {
                id: RecordId::from_sequence(seed.sequence),
                household_id: seed.household_id.to_owned(),
                village: seed.village.to_owned(),
                block: "Sanganer".to_owned(),
                district: "Jaipur".to_owned(),
                location: GeoPoint::new(seed.latitude, seed.longitude),
                captured_at: now - TimeDelta::hours(seed.hours_ago),
                tap_photo: placeholder_photo(photo_index * 2 - 1),
                beneficiary_photo: placeholder_photo(photo_index * 2),
                status: seed.status,
                created_by_user_id: UserId::new("u1"),
                created_by_name: "Rajesh Kumar".to_owned(),
                rejection_reason: rejected
                    .then(|| RejectionReason::Other(SEED_REJECTION_REASON.to_owned())),
                rejection_comment: None,
            })
        })
        .collect()
}

fn placeholder_photo(index: u64) -> PhotoRef {
    PhotoRef::from_trusted(format!("https://picsum.photos/400/300?random={index}"))
}
