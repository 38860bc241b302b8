//! Session persistence and route resolution across restarts.

use geotag::identity::domain::{Route, RouteDecision, UserRole};
use rstest::rstest;

use super::helpers::{Profile, profile, sign_in};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_is_restored_after_restart(profile: Profile) -> Result<(), eyre::Report> {
    let admin = sign_in(&profile, "admin").await?;

    let restarted = Profile::reopen(profile.storage.clone());
    let restored = restarted.identity.current_session().await?;

    eyre::ensure!(restored.as_ref() == Some(&admin), "session not restored");
    eyre::ensure!(admin.role() == UserRole::Admin, "admin role expected");
    Ok(())
}

#[rstest]
#[case("/admin/submissions/TC-1001", RouteDecision::Allow(Route::SubmissionDetail("TC-1001".to_owned())))]
#[case("/new", RouteDecision::Redirect(Route::AdminDashboard))]
#[case("/login", RouteDecision::Redirect(Route::AdminDashboard))]
#[case("/nowhere", RouteDecision::Redirect(Route::AdminDashboard))]
#[tokio::test(flavor = "multi_thread")]
async fn admin_routes_resolve_by_role(
    profile: Profile,
    #[case] path: &str,
    #[case] expected: RouteDecision,
) -> Result<(), eyre::Report> {
    sign_in(&profile, "admin").await?;

    let decision = profile.identity.resolve(path).await?;

    eyre::ensure!(decision == expected, "{path}: expected {expected:?}, got {decision:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_returns_protected_routes_to_login(profile: Profile) -> Result<(), eyre::Report> {
    sign_in(&profile, "worker").await?;
    profile.identity.logout().await?;

    let decision = profile.identity.resolve("/submissions").await?;

    eyre::ensure!(
        decision == RouteDecision::Redirect(Route::Login),
        "expected login redirect, got {decision:?}"
    );
    Ok(())
}
