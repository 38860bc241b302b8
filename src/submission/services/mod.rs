//! Application services for submission creation and review.

mod request;
mod store;

pub use request::CreateSubmissionRequest;
pub use store::{SubmissionStore, SubmissionStoreError, SubmissionStoreResult};
