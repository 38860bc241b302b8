//! Then steps for submission review BDD scenarios.

use super::world::{ReviewWorld, run_async};
use geotag::submission::{
    domain::{RecordId, SubmissionDomainError, TapStatus},
    services::SubmissionStoreError,
};
use rstest_bdd_macros::then;

fn parse_status(status: &str) -> Result<TapStatus, eyre::Report> {
    TapStatus::try_from(status).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[then("{count:usize} records are listed")]
fn records_listed(world: &ReviewWorld, count: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.listed.len() == count,
        "expected {count} records, found {}",
        world.listed.len()
    );
    Ok(())
}

#[then(r#"{count:usize} records are "{status}""#)]
fn records_with_status(world: &ReviewWorld, count: usize, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let found = world
        .listed
        .iter()
        .filter(|record| record.status() == expected)
        .count();
    eyre::ensure!(found == count, "expected {count} {status} records, found {found}");
    Ok(())
}

#[then(r#"the captured record is "{expected}""#)]
fn captured_record_is(world: &ReviewWorld, expected: String) -> Result<(), eyre::Report> {
    let created = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no record was captured"))?;
    let matches = match TapStatus::try_from(expected.as_str()) {
        Ok(status) => created.status() == status,
        Err(_) => created.id().as_str() == expected,
    };
    eyre::ensure!(matches, "captured record {created:?} is not {expected}");
    Ok(())
}

#[then(r#"record "{id}" is "{status}""#)]
fn record_has_status(world: &ReviewWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let record = run_async(world.store.find(&RecordId::new(id.as_str())))?
        .ok_or_else(|| eyre::eyre!("record {id} not found"))?;
    eyre::ensure!(
        record.status() == expected,
        "record {id} is {}, expected {expected}",
        record.status()
    );
    Ok(())
}

#[then(r#"record "{id}" has rejection reason "{reason}""#)]
fn record_has_reason(world: &ReviewWorld, id: String, reason: String) -> Result<(), eyre::Report> {
    let record = run_async(world.store.find(&RecordId::new(id.as_str())))?
        .ok_or_else(|| eyre::eyre!("record {id} not found"))?;
    let label = record.rejection_reason().map(ToString::to_string);
    eyre::ensure!(
        label.as_deref() == Some(reason.as_str()),
        "record {id} has reason {label:?}"
    );
    Ok(())
}

#[then("the review fails with an invalid status transition")]
fn review_fails_with_invalid_transition(world: &ReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_review_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing review result"))?;
    eyre::ensure!(
        matches!(
            result,
            Err(SubmissionStoreError::Domain(
                SubmissionDomainError::InvalidStatusTransition { .. }
            ))
        ),
        "expected InvalidStatusTransition, got {result:?}"
    );
    Ok(())
}

#[then("the review fails because the record does not exist")]
fn review_fails_with_not_found(world: &ReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_review_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing review result"))?;
    eyre::ensure!(
        matches!(result, Err(SubmissionStoreError::NotFound(_))),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}
