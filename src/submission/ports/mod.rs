//! Port contracts for the submission store.
//!
//! Ports define infrastructure-agnostic interfaces used by submission
//! services.

pub mod id_source;
pub mod repository;

pub use id_source::RecordIdSource;
pub use repository::{
    StoredRecords, SubmissionRepository, SubmissionRepositoryError, SubmissionRepositoryResult,
};
