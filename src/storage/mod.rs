//! Durable key-value storage shared by the identity and submission contexts.
//!
//! The storage layer stands in for the browser-profile key-value store the
//! field application persists into. Each key holds one opaque document that
//! is read and rewritten wholesale.
//!
//! - Port contract in [`ports`]
//! - In-memory and directory-backed adapters in [`adapters`]

pub mod adapters;
pub mod ports;

pub use ports::{KeyValueStore, StorageError, StorageResult};
