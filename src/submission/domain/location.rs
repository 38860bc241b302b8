//! Geolocation of a captured connection.

use super::SubmissionDomainError;
use serde::{Deserialize, Serialize};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// WGS84 coordinate pair in decimal degrees.
///
/// `0,0` is the sentinel for "not yet captured".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// The "not yet captured" sentinel.
    pub const NOT_CAPTURED: Self = Self::new(0.0, 0.0);

    /// Creates a point without validation.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a point for a submission, rejecting the sentinel and
    /// out-of-range or non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionDomainError::LocationNotCaptured`] for `0,0` and
    /// [`SubmissionDomainError::LocationOutOfRange`] for invalid degrees.
    pub fn captured(latitude: f64, longitude: f64) -> Result<Self, SubmissionDomainError> {
        let point = Self::new(latitude, longitude);
        let in_range =
            (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        if !in_range {
            return Err(SubmissionDomainError::LocationOutOfRange {
                latitude,
                longitude,
            });
        }
        if !point.is_captured() {
            return Err(SubmissionDomainError::LocationNotCaptured);
        }
        Ok(point)
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }

    /// Returns `false` for the `0,0` sentinel.
    #[must_use]
    pub fn is_captured(self) -> bool {
        self.latitude.abs() >= f64::EPSILON || self.longitude.abs() >= f64::EPSILON
    }

    /// Returns an external map search link centred on this point.
    #[must_use]
    pub fn maps_link(self) -> String {
        format!("{MAPS_SEARCH_URL}{},{}", self.latitude, self.longitude)
    }
}
