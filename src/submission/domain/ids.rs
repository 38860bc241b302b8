//! Record reference identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

const PREFIX: &str = "TC-";

/// Human-facing record reference such as `TC-1004`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an existing reference.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds the reference for a sequence number, e.g. `1004` → `TC-1004`.
    #[must_use]
    pub fn from_sequence(number: u64) -> Self {
        Self(format!("{PREFIX}{number}"))
    }

    /// Returns the numeric suffix of a `TC-<digits>` reference.
    #[must_use]
    pub fn sequence_number(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
