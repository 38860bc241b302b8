//! Then steps for route access BDD scenarios.

use super::world::{AccessWorld, run_async};
use geotag::identity::{adapters::SESSION_KEY, domain::RouteDecision};
use geotag::storage::KeyValueStore;
use rstest_bdd_macros::then;

fn last_decision(world: &AccessWorld) -> Result<&RouteDecision, eyre::Report> {
    world
        .last_decision
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no path was requested"))
}

#[then(r#"the visitor is redirected to "{path}""#)]
fn redirected_to(world: &AccessWorld, path: String) -> Result<(), eyre::Report> {
    let decision = last_decision(world)?;
    eyre::ensure!(
        matches!(decision, RouteDecision::Redirect(route) if route.path() == path),
        "expected redirect to {path}, got {decision:?}"
    );
    Ok(())
}

#[then("the path is allowed")]
fn path_allowed(world: &AccessWorld) -> Result<(), eyre::Report> {
    let decision = last_decision(world)?;
    eyre::ensure!(
        matches!(decision, RouteDecision::Allow(_)),
        "expected the path to be allowed, got {decision:?}"
    );
    Ok(())
}

#[then("no session is stored")]
fn no_session_stored(world: &AccessWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.storage.get(SESSION_KEY))?;
    eyre::ensure!(stored.is_none(), "a session was stored");
    Ok(())
}
