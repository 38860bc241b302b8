//! Adapter implementations for identity ports.

pub mod seeded;
pub mod storage;

pub use seeded::{SeededUserDirectory, seed_users};
pub use storage::{KeyValueSessionRepository, SESSION_KEY};
