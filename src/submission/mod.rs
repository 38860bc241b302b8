//! Tap-connection submission lifecycle and queries.
//!
//! Field workers create records that start `PENDING`; administrators approve
//! or reject each one exactly once. The record list lives in durable
//! key-value storage as one JSON document that is rewritten on every change,
//! and is seeded with demonstration data the first time it is read.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Read-only filters and aggregates in [`query`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;
