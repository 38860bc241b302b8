//! Port contracts for identity resolution.
//!
//! Ports define infrastructure-agnostic interfaces used by identity services.

pub mod directory;
pub mod session;

pub use directory::UserDirectory;
pub use session::{SessionRepository, SessionRepositoryError, SessionRepositoryResult};
