//! Request payload for capturing a new submission.

use crate::identity::domain::{User, UserId};
use crate::submission::domain::{GeoPoint, NewSubmission};

/// Capture-form input for a new tap-connection record.
///
/// Unset coordinates stay at the `0,0` "not captured" sentinel and unset
/// photos stay empty; both are rejected when the store validates the
/// request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSubmissionRequest {
    household_id: String,
    village: String,
    block: String,
    district: String,
    location: GeoPoint,
    tap_photo: String,
    beneficiary_photo: String,
    created_by_user_id: UserId,
    created_by_name: String,
}

impl CreateSubmissionRequest {
    /// Creates a request with the household and area fields.
    #[must_use]
    pub fn new(
        household_id: impl Into<String>,
        village: impl Into<String>,
        block: impl Into<String>,
        district: impl Into<String>,
    ) -> Self {
        Self {
            household_id: household_id.into(),
            village: village.into(),
            block: block.into(),
            district: district.into(),
            location: GeoPoint::NOT_CAPTURED,
            tap_photo: String::new(),
            beneficiary_photo: String::new(),
            created_by_user_id: UserId::new(""),
            created_by_name: String::new(),
        }
    }

    /// Creates a request attributed to `user`, defaulting block and district
    /// to the user's home area.
    #[must_use]
    pub fn for_user(
        user: &User,
        household_id: impl Into<String>,
        village: impl Into<String>,
    ) -> Self {
        Self::new(
            household_id,
            village,
            user.block().unwrap_or_default(),
            user.district().unwrap_or_default(),
        )
        .created_by(user.id().clone(), user.name())
    }

    /// Sets the captured coordinates.
    #[must_use]
    pub const fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = GeoPoint::new(latitude, longitude);
        self
    }

    /// Sets both evidence photo references.
    #[must_use]
    pub fn with_photos(
        mut self,
        tap_photo: impl Into<String>,
        beneficiary_photo: impl Into<String>,
    ) -> Self {
        self.tap_photo = tap_photo.into();
        self.beneficiary_photo = beneficiary_photo.into();
        self
    }

    /// Sets the creating user.
    #[must_use]
    pub fn created_by(mut self, user_id: UserId, name: impl Into<String>) -> Self {
        self.created_by_user_id = user_id;
        self.created_by_name = name.into();
        self
    }

    /// Sets the block and district.
    #[must_use]
    pub fn with_area(mut self, block: impl Into<String>, district: impl Into<String>) -> Self {
        self.block = block.into();
        self.district = district.into();
        self
    }

    pub(super) fn into_new_submission(self) -> NewSubmission {
        NewSubmission {
            household_id: self.household_id,
            village: self.village,
            block: self.block,
            district: self.district,
            latitude: self.location.latitude(),
            longitude: self.location.longitude(),
            tap_photo: self.tap_photo,
            beneficiary_photo: self.beneficiary_photo,
            created_by_user_id: self.created_by_user_id,
            created_by_name: self.created_by_name,
        }
    }
}
