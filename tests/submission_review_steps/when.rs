//! When steps for submission review BDD scenarios.

use super::world::{ReviewWorld, run_async};
use eyre::WrapErr;
use geotag::submission::{
    domain::{RecordId, RejectionReason},
    services::CreateSubmissionRequest,
};
use rstest_bdd_macros::when;

const PHOTO: &str = "data:image/png;base64,iVBORw0KGgo=";

#[when("the records are listed")]
fn list_records(world: &mut ReviewWorld) -> Result<(), eyre::Report> {
    world.listed = run_async(world.store.list()).wrap_err("list records")?;
    Ok(())
}

#[when(r#"the field worker captures household "{household}" in village "{village}""#)]
fn capture_household(
    world: &mut ReviewWorld,
    household: String,
    village: String,
) -> Result<(), eyre::Report> {
    let worker = world
        .signed_in
        .as_ref()
        .ok_or_else(|| eyre::eyre!("nobody is signed in"))?;
    let request = CreateSubmissionRequest::for_user(worker, household, village)
        .at(26.9, 75.8)
        .with_photos(PHOTO, PHOTO);
    let created = run_async(world.store.create(request)).wrap_err("capture household")?;
    world.last_created = Some(created);
    Ok(())
}

#[when(r#"record "{id}" is approved"#)]
fn approve_record(world: &mut ReviewWorld, id: String) {
    let result = run_async(world.store.approve(&RecordId::new(id)));
    world.last_review_result = Some(result);
}

#[when(r#"record "{id}" is rejected for "{reason}""#)]
fn reject_record(world: &mut ReviewWorld, id: String, reason: String) -> Result<(), eyre::Report> {
    let parsed = RejectionReason::parse(&reason)?;
    let result = run_async(world.store.reject(&RecordId::new(id), parsed));
    world.last_review_result = Some(result);
    Ok(())
}
