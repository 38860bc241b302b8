//! Given steps for route access BDD scenarios.

use super::world::{AccessWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("nobody is signed in")]
fn nobody_signed_in(world: &mut AccessWorld) -> Result<(), eyre::Report> {
    run_async(world.service.logout()).wrap_err("clear session")?;
    Ok(())
}

#[given(r#""{username}" has signed in"#)]
fn user_signed_in(world: &mut AccessWorld, username: String) -> Result<(), eyre::Report> {
    run_async(world.service.login(&username))
        .wrap_err("sign in")?
        .ok_or_else(|| eyre::eyre!("no seeded account named {username}"))?;
    Ok(())
}
