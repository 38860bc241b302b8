//! Identity resolution and session persistence.
//!
//! Field workers and administrators sign in by login name alone against a
//! fixed set of seeded accounts. The resolved user is persisted as the
//! current session so a restarted process can restore it. There are no
//! passwords, tokens or expiry; role checks happen only in route resolution.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
