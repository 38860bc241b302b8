//! Map framing and marker styling.

use crate::submission::domain::{GeoPoint, TapConnectionRecord, TapStatus};

/// Centre used when there are no points to frame (Jaipur).
pub const DEFAULT_MAP_CENTRE: GeoPoint = GeoPoint::new(26.9124, 75.7873);

/// Marker colour per review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColour {
    /// Approved connections.
    Green,
    /// Pending connections.
    Yellow,
    /// Rejected connections.
    Red,
}

impl MarkerColour {
    /// Returns the CSS hex colour.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#22c55e",
            Self::Yellow => "#eab308",
            Self::Red => "#ef4444",
        }
    }
}

/// Returns the marker colour for `status`.
#[must_use]
pub const fn marker_colour(status: TapStatus) -> MarkerColour {
    match status {
        TapStatus::Approved => MarkerColour::Green,
        TapStatus::Pending => MarkerColour::Yellow,
        TapStatus::Rejected => MarkerColour::Red,
    }
}

/// Returns the mean position of `records`, or [`DEFAULT_MAP_CENTRE`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the map centre is the arithmetic mean of the coordinates"
)]
pub fn map_centre(records: &[TapConnectionRecord]) -> GeoPoint {
    let Ok(count) = u32::try_from(records.len()) else {
        return DEFAULT_MAP_CENTRE;
    };
    if count == 0 {
        return DEFAULT_MAP_CENTRE;
    }
    let (latitude_sum, longitude_sum) =
        records
            .iter()
            .fold((0.0_f64, 0.0_f64), |(latitude, longitude), record| {
                let point = record.location();
                (latitude + point.latitude(), longitude + point.longitude())
            });
    let divisor = f64::from(count);
    GeoPoint::new(latitude_sum / divisor, longitude_sum / divisor)
}
