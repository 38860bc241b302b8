//! Runtime settings loaded through `OrthoConfig`.
//!
//! Values resolve from command-line flags, `GEOTAG_*` environment variables
//! and configuration files, falling back to the defaults below.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::latency::LatencyProfile;

const DEFAULT_DATA_DIR: &str = "geotag-data";

/// Settings for the storage location, simulated latency and seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GEOTAG")]
pub struct GeotagSettings {
    /// Directory holding the persisted session and record documents.
    pub data_dir: Option<PathBuf>,
    /// Simulated login delay in milliseconds.
    pub login_latency_ms: Option<u64>,
    /// Simulated read delay in milliseconds.
    pub read_latency_ms: Option<u64>,
    /// Simulated review write delay in milliseconds.
    pub write_latency_ms: Option<u64>,
    /// Simulated upload delay in milliseconds.
    pub upload_latency_ms: Option<u64>,
    /// Leave empty storage empty instead of writing the demonstration
    /// records.
    pub no_seed: bool,
}

impl GeotagSettings {
    /// Return the configured data directory, falling back to the default.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Returns `true` unless seeding was switched off.
    #[must_use]
    pub const fn seed_on_empty(&self) -> bool {
        !self.no_seed
    }

    /// Build the latency profile, using defaults for unset values.
    #[must_use]
    pub fn latency_profile(&self) -> LatencyProfile {
        let millis = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default))
        };
        LatencyProfile {
            login: millis(self.login_latency_ms, LatencyProfile::DEFAULT_LOGIN_MS),
            read: millis(self.read_latency_ms, LatencyProfile::DEFAULT_READ_MS),
            write: millis(self.write_latency_ms, LatencyProfile::DEFAULT_WRITE_MS),
            upload: millis(self.upload_latency_ms, LatencyProfile::DEFAULT_UPLOAD_MS),
        }
    }
}
