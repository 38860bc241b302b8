//! Application services for sign-in and session restoration.

mod identity;

pub use identity::{IdentityError, IdentityResult, IdentityService};
