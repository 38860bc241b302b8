//! Unit tests for the submission lifecycle.


use chrono::TimeDelta;

use crate::identity::domain::UserId;
use crate::submission::domain::{
    GeoPoint, PersistedRecordData, PhotoRef, PhotoSlot, RecordId, TapConnectionRecord, TapStatus,
};
use crate::test_support::fixture_timestamp;

/// Smallest valid embedded image reference.
pub(super) const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Builds a stored record captured `hours_ago` before the fixture instant.
pub(super) fn record(id: u64, status: TapStatus, hours_ago: i64) -> TapConnectionRecord {
    record_for(id, status, hours_ago, "u1", "Rajesh Kumar")
}

pub(super) fn record_for(
    id: u64,
    status: TapStatus,
    hours_ago: i64,
    user_id: &str,
    user_name: &str,
) -> TapConnectionRecord {
    record_with_id(RecordId::from_sequence(id), status, hours_ago, user_id, user_name)
}

pub(super) fn record_with_id(
    id: RecordId,
    status: TapStatus,
    hours_ago: i64,
    user_id: &str,
    user_name: &str,
) -> TapConnectionRecord {
    let household_id = format!("HH-{}", id.sequence_number().unwrap_or_default());
    TapConnectionRecord::from_persisted(PersistedRecordData {
        id,
        household_id,
        village: "Rampur".to_owned(),
        block: "Sanganer".to_owned(),
        district: "Jaipur".to_owned(),
        location: GeoPoint::new(26.8, 75.8),
        captured_at: fixture_timestamp() - TimeDelta::hours(hours_ago),
        tap_photo: photo(),
        beneficiary_photo: photo(),
        status,
        created_by_user_id: UserId::new(user_id),
        created_by_name: user_name.to_owned(),
        rejection_reason: None,
        rejection_comment: None,
    })
}

fn photo() -> PhotoRef {
    PhotoRef::parse(PhotoSlot::TapConnection, TINY_PNG).expect("fixture photo should parse")
}
