//! Tap-connection record aggregate.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{
    GeoPoint, PhotoRef, PhotoSlot, RecordId, RejectionReason, ReviewDecision,
    SubmissionDomainError, TapStatus,
};
use crate::identity::domain::UserId;

/// Raw capture-form input for a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    /// Household identifier.
    pub household_id: String,
    /// Village name.
    pub village: String,
    /// Block name.
    pub block: String,
    /// District name.
    pub district: String,
    /// Captured latitude in degrees.
    pub latitude: f64,
    /// Captured longitude in degrees.
    pub longitude: f64,
    /// Tap connection photo reference.
    pub tap_photo: String,
    /// Beneficiary photo reference.
    pub beneficiary_photo: String,
    /// Creating user.
    pub created_by_user_id: UserId,
    /// Creating user's display name.
    pub created_by_name: String,
}

/// Validated field-worker input for a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDetails {
    household_id: String,
    village: String,
    block: String,
    district: String,
    location: GeoPoint,
    tap_photo: PhotoRef,
    beneficiary_photo: PhotoRef,
    created_by_user_id: UserId,
    created_by_name: String,
}

impl SubmissionDetails {
    /// Validates raw capture-form input.
    ///
    /// Household id, village and creator are required; block and district
    /// are kept as supplied. Both photos and a captured location are
    /// mandatory.
    ///
    /// # Errors
    ///
    /// Returns the first [`SubmissionDomainError`] found.
    pub fn new(input: NewSubmission) -> Result<Self, SubmissionDomainError> {
        Ok(Self {
            household_id: required(&input.household_id, "household id")?,
            village: required(&input.village, "village")?,
            block: input.block.trim().to_owned(),
            district: input.district.trim().to_owned(),
            location: GeoPoint::captured(input.latitude, input.longitude)?,
            tap_photo: PhotoRef::parse(PhotoSlot::TapConnection, input.tap_photo)?,
            beneficiary_photo: PhotoRef::parse(PhotoSlot::Beneficiary, input.beneficiary_photo)?,
            created_by_user_id: UserId::new(required(
                input.created_by_user_id.as_str(),
                "creator id",
            )?),
            created_by_name: required(&input.created_by_name, "creator name")?,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, SubmissionDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SubmissionDomainError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// Submitted evidence of one household tap connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapConnectionRecord {
    id: RecordId,
    household_id: String,
    village: String,
    block: String,
    district: String,
    #[serde(flatten)]
    location: GeoPoint,
    captured_at: DateTime<Utc>,
    #[serde(rename = "photo1Url")]
    tap_photo: PhotoRef,
    #[serde(rename = "photo2Url")]
    beneficiary_photo: PhotoRef,
    status: TapStatus,
    created_by_user_id: UserId,
    created_by_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejection_reason: Option<RejectionReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rejection_comment: Option<String>,
}

/// Parameter object for reconstructing a stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedRecordData {
    /// Record reference.
    pub id: RecordId,
    /// Household identifier.
    pub household_id: String,
    /// Village name.
    pub village: String,
    /// Block name.
    pub block: String,
    /// District name.
    pub district: String,
    /// Captured coordinates.
    pub location: GeoPoint,
    /// Capture timestamp.
    pub captured_at: DateTime<Utc>,
    /// Tap connection photo.
    pub tap_photo: PhotoRef,
    /// Beneficiary photo.
    pub beneficiary_photo: PhotoRef,
    /// Review status.
    pub status: TapStatus,
    /// Creating user.
    pub created_by_user_id: UserId,
    /// Creating user's display name at capture time.
    pub created_by_name: String,
    /// Rejection reason, for rejected records.
    pub rejection_reason: Option<RejectionReason>,
    /// Rejection comment, for rejected records.
    pub rejection_comment: Option<String>,
}

impl TapConnectionRecord {
    /// Creates a pending record captured now.
    #[must_use]
    pub fn submit(id: RecordId, details: SubmissionDetails, clock: &impl Clock) -> Self {
        Self {
            id,
            household_id: details.household_id,
            village: details.village,
            block: details.block,
            district: details.district,
            location: details.location,
            captured_at: clock.utc(),
            tap_photo: details.tap_photo,
            beneficiary_photo: details.beneficiary_photo,
            status: TapStatus::Pending,
            created_by_user_id: details.created_by_user_id,
            created_by_name: details.created_by_name,
            rejection_reason: None,
            rejection_comment: None,
        }
    }

    /// Reconstructs a record from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedRecordData) -> Self {
        Self {
            id: data.id,
            household_id: data.household_id,
            village: data.village,
            block: data.block,
            district: data.district,
            location: data.location,
            captured_at: data.captured_at,
            tap_photo: data.tap_photo,
            beneficiary_photo: data.beneficiary_photo,
            status: data.status,
            created_by_user_id: data.created_by_user_id,
            created_by_name: data.created_by_name,
            rejection_reason: data.rejection_reason,
            rejection_comment: data.rejection_comment,
        }
    }

    /// Returns the record reference.
    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the household identifier.
    #[must_use]
    pub fn household_id(&self) -> &str {
        &self.household_id
    }

    /// Returns the village name.
    #[must_use]
    pub fn village(&self) -> &str {
        &self.village
    }

    /// Returns the block name.
    #[must_use]
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Returns the district name.
    #[must_use]
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Returns the captured coordinates.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    /// Returns the capture timestamp.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Returns the tap connection photo.
    #[must_use]
    pub const fn tap_photo(&self) -> &PhotoRef {
        &self.tap_photo
    }

    /// Returns the beneficiary photo.
    #[must_use]
    pub const fn beneficiary_photo(&self) -> &PhotoRef {
        &self.beneficiary_photo
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> TapStatus {
        self.status
    }

    /// Returns the creating user's identifier.
    #[must_use]
    pub const fn created_by_user_id(&self) -> &UserId {
        &self.created_by_user_id
    }

    /// Returns the creating user's display name.
    #[must_use]
    pub fn created_by_name(&self) -> &str {
        &self.created_by_name
    }

    /// Returns the rejection reason, if rejected.
    #[must_use]
    pub const fn rejection_reason(&self) -> Option<&RejectionReason> {
        self.rejection_reason.as_ref()
    }

    /// Returns the rejection comment, if any.
    #[must_use]
    pub fn rejection_comment(&self) -> Option<&str> {
        self.rejection_comment.as_deref()
    }

    /// Applies a review decision to a pending record.
    ///
    /// Only the status and rejection details change.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::InvalidStatusTransition`] when the
    /// record has already been reviewed.
    pub fn apply_review(&mut self, decision: ReviewDecision) -> Result<(), SubmissionDomainError> {
        let target = decision.status();
        if !self.status.can_transition_to(target) {
            return Err(SubmissionDomainError::InvalidStatusTransition {
                record_id: self.id.clone(),
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        if let ReviewDecision::Reject { reason, comment } = decision {
            self.rejection_reason = Some(reason);
            self.rejection_comment = comment;
        }
        Ok(())
    }
}
