//! Error types for submission validation, review and parsing.

use super::{RecordId, TapStatus};
use std::fmt;
use thiserror::Error;

/// Which of the two evidence photos a validation error concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoSlot {
    /// Close-up of the tap connection.
    TapConnection,
    /// Beneficiary standing with the tap.
    Beneficiary,
}

impl fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TapConnection => f.write_str("tap connection photo"),
            Self::Beneficiary => f.write_str("beneficiary photo"),
        }
    }
}

/// Errors returned while validating or reviewing submissions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmissionDomainError {
    /// A required text field is empty after trimming.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// A required photo was not supplied.
    #[error("{0} is required")]
    MissingPhoto(PhotoSlot),

    /// A photo reference is neither embedded image data nor a web URL.
    #[error("{slot} is not a valid image reference: {reason}")]
    InvalidPhoto {
        /// Offending photo.
        slot: PhotoSlot,
        /// Why the reference was rejected.
        reason: String,
    },

    /// The location still holds the `0,0` "not captured" sentinel.
    #[error("location has not been captured")]
    LocationNotCaptured,

    /// Coordinates are not finite or fall outside valid degree ranges.
    #[error("location {latitude}, {longitude} is outside valid coordinate ranges")]
    LocationOutOfRange {
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },

    /// A rejection was requested without a reason.
    #[error("rejection reason must not be empty")]
    EmptyRejectionReason,

    /// The requested status is not a review outcome.
    #[error("{0} is not a review outcome")]
    NotAReviewOutcome(TapStatus),

    /// The record has already been reviewed.
    #[error("invalid status transition for record {record_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Record under review.
        record_id: RecordId,
        /// Current status.
        from: TapStatus,
        /// Requested status.
        to: TapStatus,
    },
}

/// Error returned while parsing submission statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown submission status: {0}")]
pub struct ParseTapStatusError(pub String);
