//! Review decisions and rejection reasons.

use super::{SubmissionDomainError, TapStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comment attached to rejections when the reviewer supplies none.
pub const DEFAULT_REJECTION_COMMENT: &str = "Admin verification failed";

/// Short code explaining a rejection.
///
/// The four standard codes are offered on the review screen; any other text
/// is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RejectionReason {
    /// Photos are too blurry or dark to verify.
    ImageUnclear,
    /// Coordinates do not match the household.
    IncorrectLocation,
    /// The household was already submitted.
    DuplicateEntry,
    /// The household could not be located.
    HouseholdNotFound,
    /// Free-form reason.
    Other(String),
}

impl RejectionReason {
    /// The standard codes in display order.
    pub const STANDARD: [Self; 4] = [
        Self::ImageUnclear,
        Self::IncorrectLocation,
        Self::DuplicateEntry,
        Self::HouseholdNotFound,
    ];

    /// Parses a reason, matching standard codes case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::EmptyRejectionReason`] for blank
    /// input.
    pub fn parse(value: &str) -> Result<Self, SubmissionDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SubmissionDomainError::EmptyRejectionReason);
        }
        let reason = Self::STANDARD
            .into_iter()
            .find(|standard| standard.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Other(trimmed.to_owned()));
        Ok(reason)
    }

    /// Restores a reason read back from storage.
    ///
    /// Only exact standard labels map to the standard codes; any other text,
    /// including a differently cased label, is kept byte for byte so stored
    /// documents survive a load and save unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::EmptyRejectionReason`] for blank
    /// input.
    pub fn from_stored(value: String) -> Result<Self, SubmissionDomainError> {
        if value.trim().is_empty() {
            return Err(SubmissionDomainError::EmptyRejectionReason);
        }
        let reason = Self::STANDARD
            .into_iter()
            .find(|standard| standard.label() == value)
            .unwrap_or_else(|| Self::Other(value));
        Ok(reason)
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::ImageUnclear => "Image Unclear",
            Self::IncorrectLocation => "Incorrect Location",
            Self::DuplicateEntry => "Duplicate Entry",
            Self::HouseholdNotFound => "Household Not Found",
            Self::Other(text) => text,
        }
    }
}

impl TryFrom<String> for RejectionReason {
    type Error = SubmissionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_stored(value)
    }
}

impl From<RejectionReason> for String {
    fn from(reason: RejectionReason) -> Self {
        match reason {
            RejectionReason::Other(text) => text,
            standard => standard.label().to_owned(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of an administrator review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Accept the connection.
    Approve,
    /// Refuse the connection.
    Reject {
        /// Why the record was refused.
        reason: RejectionReason,
        /// Optional free-text note for the field worker.
        comment: Option<String>,
    },
}

impl ReviewDecision {
    /// Rejects with the standard comment.
    #[must_use]
    pub fn reject(reason: RejectionReason) -> Self {
        Self::Reject {
            reason,
            comment: Some(DEFAULT_REJECTION_COMMENT.to_owned()),
        }
    }

    /// Builds a decision from a raw status and optional rejection details.
    ///
    /// Details are ignored for approvals; blank comments count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::NotAReviewOutcome`] for `Pending` and
    /// [`SubmissionDomainError::EmptyRejectionReason`] when a rejection has
    /// no reason.
    pub fn from_parts(
        status: TapStatus,
        reason: Option<&str>,
        comment: Option<&str>,
    ) -> Result<Self, SubmissionDomainError> {
        match status {
            TapStatus::Pending => Err(SubmissionDomainError::NotAReviewOutcome(status)),
            TapStatus::Approved => Ok(Self::Approve),
            TapStatus::Rejected => {
                let parsed = RejectionReason::parse(reason.unwrap_or_default())?;
                let note = comment
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(str::to_owned);
                Ok(Self::Reject {
                    reason: parsed,
                    comment: note,
                })
            }
        }
    }

    /// Returns the status this decision moves a record to.
    #[must_use]
    pub const fn status(&self) -> TapStatus {
        match self {
            Self::Approve => TapStatus::Approved,
            Self::Reject { .. } => TapStatus::Rejected,
        }
    }
}
