//! Read-only views over the record list.
//!
//! Dashboards, lists, history pages and the map all derive their content
//! from [`crate::submission::services::SubmissionStore::list`] through these
//! pure functions. None of them mutate or reorder the input slice.

mod filter;
mod map;
mod summary;
mod timeline;

pub use filter::{StatusFilter, SubmissionFilter, submissions_by};
pub use map::{DEFAULT_MAP_CENTRE, MarkerColour, map_centre, marker_colour};
pub use summary::StatusCounts;
pub use timeline::{DASHBOARD_RECENT_LIMIT, most_recent, pipeline_path};
