//! Directory port resolving login names to accounts.

use crate::identity::domain::User;
use async_trait::async_trait;

/// Read-only account directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds the account whose login name equals `username` exactly.
    ///
    /// Matching is case-sensitive. Returns `None` when no account matches.
    async fn find_by_username(&self, username: &str) -> Option<User>;
}
