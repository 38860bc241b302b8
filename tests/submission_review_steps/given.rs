//! Given steps for submission review BDD scenarios.

use super::world::{ReviewWorld, run_async};
use chrono::{TimeDelta, Utc};
use eyre::WrapErr;
use geotag::identity::adapters::seed_users;
use geotag::identity::domain::UserId;
use geotag::submission::{
    adapters::KeyValueSubmissionRepository,
    domain::{
        GeoPoint, PersistedRecordData, PhotoRef, PhotoSlot, RecordId, TapConnectionRecord,
        TapStatus,
    },
    ports::SubmissionRepository,
};
use rstest_bdd_macros::given;

#[given("an empty submission store")]
fn empty_store(world: &mut ReviewWorld) {
    world.listed.clear();
}

#[given("a submission store holding {count:u64} reviewed records")]
fn store_with_reviewed_records(world: &mut ReviewWorld, count: u64) -> Result<(), eyre::Report> {
    let photo = PhotoRef::parse(
        PhotoSlot::TapConnection,
        "https://picsum.photos/400/300?random=1",
    )?;
    let now = Utc::now();
    let records: Vec<_> = (1..=count)
        .rev()
        .zip(0_i64..)
        .map(|(offset, age)| {
            TapConnectionRecord::from_persisted(PersistedRecordData {
                id: RecordId::from_sequence(1000 + offset),
                household_id: format!("HH-{offset}"),
                village: "Rampur".to_owned(),
                block: "Sanganer".to_owned(),
                district: "Jaipur".to_owned(),
                location: GeoPoint::new(26.81, 75.80),
                captured_at: now - TimeDelta::hours(age),
                tap_photo: photo.clone(),
                beneficiary_photo: photo.clone(),
                status: TapStatus::Approved,
                created_by_user_id: UserId::new("u1"),
                created_by_name: "Rajesh Kumar".to_owned(),
                rejection_reason: None,
                rejection_comment: None,
            })
        })
        .collect();
    run_async(KeyValueSubmissionRepository::new(world.storage.clone()).save(&records))
        .wrap_err("store reviewed records")?;
    Ok(())
}

#[given("the field worker is signed in")]
fn field_worker_signed_in(world: &mut ReviewWorld) -> Result<(), eyre::Report> {
    let worker = seed_users()
        .into_iter()
        .find(|user| !user.is_admin())
        .ok_or_else(|| eyre::eyre!("no seeded field worker"))?;
    world.signed_in = Some(worker);
    Ok(())
}
