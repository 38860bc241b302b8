//! Status, text, area and ownership filters.

use std::fmt;

use crate::identity::domain::UserId;
use crate::submission::domain::{ParseTapStatusError, TapConnectionRecord, TapStatus};

/// Status criterion with an "all" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// Exactly one status.
    Only(TapStatus),
}

impl StatusFilter {
    /// Returns `true` when `status` passes the filter.
    #[must_use]
    pub fn matches(self, status: TapStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseTapStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("ALL") {
            return Ok(Self::All);
        }
        TapStatus::try_from(value).map(Self::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Only(status) => status.fmt(f),
        }
    }
}

/// Combined list filter; all criteria must hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionFilter {
    status: StatusFilter,
    search: Option<String>,
    block: Option<String>,
    district: Option<String>,
}

impl SubmissionFilter {
    /// Creates a filter that accepts every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts by status.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Adds a case-insensitive search over household id, village and
    /// creator name. The text is matched as typed, surrounding whitespace
    /// included; empty text disables the search.
    #[must_use]
    pub fn with_search(mut self, text: &str) -> Self {
        self.search = (!text.is_empty()).then(|| text.to_lowercase());
        self
    }

    /// Restricts to one block, compared case-insensitively.
    #[must_use]
    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }

    /// Restricts to one district, compared case-insensitively.
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Returns `true` when `record` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &TapConnectionRecord) -> bool {
        self.status.matches(record.status())
            && self.search.as_deref().is_none_or(|needle| {
                [
                    record.household_id(),
                    record.village(),
                    record.created_by_name(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
            })
            && same_area(self.block.as_deref(), record.block())
            && same_area(self.district.as_deref(), record.district())
    }

    /// Returns the matching records in input order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [TapConnectionRecord]) -> Vec<&'a TapConnectionRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

fn same_area(expected: Option<&str>, actual: &str) -> bool {
    expected.is_none_or(|area| area.trim().eq_ignore_ascii_case(actual.trim()))
}

/// Returns the records created by `user_id`, newest capture first.
#[must_use]
pub fn submissions_by<'a>(
    records: &'a [TapConnectionRecord],
    user_id: &UserId,
) -> Vec<&'a TapConnectionRecord> {
    let mut mine: Vec<_> = records
        .iter()
        .filter(|record| record.created_by_user_id() == user_id)
        .collect();
    mine.sort_by(|left, right| right.captured_at().cmp(&left.captured_at()));
    mine
}
