//! Domain model for users, roles and role-guarded routes.

mod access;
mod error;
mod user;

pub use access::{Route, RouteDecision, home_route, resolve_route};
pub use error::ParseUserRoleError;
pub use user::{User, UserId, UserRole};
