//! Geotag: field capture and review of household tap connections.
//!
//! Field workers submit geotagged photo evidence of household water-tap
//! connections; administrators approve or reject each submission once.
//! This crate is the non-UI core behind those screens.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (key-value storage, id
//!   sources)
//! - **Services**: Orchestration over injected ports
//!
//! # Modules
//!
//! - [`identity`]: Login by name, session persistence and route guards
//! - [`submission`]: Record lifecycle, review workflow and read-only queries
//! - [`storage`]: Durable key-value port with in-memory and directory adapters
//! - [`latency`]: Simulated remote-call delays
//! - [`config`]: Layered runtime settings
//! - [`app`]: Composition root over a data directory

pub mod app;
pub mod config;
pub mod identity;
pub mod latency;
pub mod storage;
pub mod submission;

#[cfg(test)]
mod test_support;
