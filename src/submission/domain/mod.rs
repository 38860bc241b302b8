//! Domain model for tap-connection submissions.
//!
//! A submission is one household's claimed tap connection: where it is, two
//! photos proving it, who captured it and when, and where it stands in the
//! review workflow. Infrastructure concerns stay outside this boundary.

mod error;
mod evidence;
mod ids;
mod location;
mod record;
mod review;
mod seed;
mod status;

pub use error::{ParseTapStatusError, PhotoSlot, SubmissionDomainError};
pub use evidence::PhotoRef;
pub use ids::RecordId;
pub use location::GeoPoint;
pub use record::{NewSubmission, PersistedRecordData, SubmissionDetails, TapConnectionRecord};
pub use review::{DEFAULT_REJECTION_COMMENT, RejectionReason, ReviewDecision};
pub use seed::{SEED_RECORD_COUNT, seed_records};
pub use status::TapStatus;
