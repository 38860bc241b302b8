//! Error types for identity domain parsing.

use thiserror::Error;

/// Error returned while parsing a user role.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(pub String);
