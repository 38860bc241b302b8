//! Fixed account directory.

use async_trait::async_trait;

use crate::identity::{
    domain::{User, UserId, UserRole},
    ports::UserDirectory,
};

/// Returns the two accounts every installation ships with.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(
            UserId::new("u1"),
            "Rajesh Kumar",
            "worker",
            UserRole::FieldWorker,
        )
        .with_district("Jaipur")
        .with_block("Sanganer"),
        User::new(UserId::new("a1"), "Amit Verma", "admin", UserRole::Admin)
            .with_district("Jaipur"),
    ]
}

/// Directory over an immutable account list.
#[derive(Debug, Clone)]
pub struct SeededUserDirectory {
    users: Vec<User>,
}

impl SeededUserDirectory {
    /// Creates a directory holding the seeded accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(seed_users())
    }

    /// Creates a directory over the given accounts.
    #[must_use]
    pub const fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Returns every account in the directory.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl Default for SeededUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for SeededUserDirectory {
    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.username() == username)
            .cloned()
    }
}
