//! Simulated remote-call latency.
//!
//! The store and identity services pause for a fixed delay before each
//! operation so callers experience the same pacing as a remote backend.
//! Delays go through a [`Sleeper`] so tests can skip or record them.

use async_trait::async_trait;
use std::time::Duration;

/// Waits for a simulated network delay.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the Tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Sleeper that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateSleeper;

#[async_trait]
impl Sleeper for ImmediateSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Per-operation simulated delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Delay before resolving a login.
    pub login: Duration,
    /// Delay before plain reads (`list`, `find`).
    pub read: Duration,
    /// Delay before review writes (`update_status`).
    pub write: Duration,
    /// Delay before record creation, the heavier "upload" path.
    pub upload: Duration,
}

impl LatencyProfile {
    /// Default login delay in milliseconds.
    pub const DEFAULT_LOGIN_MS: u64 = 500;
    /// Default read delay in milliseconds.
    pub const DEFAULT_READ_MS: u64 = 300;
    /// Default review write delay in milliseconds.
    pub const DEFAULT_WRITE_MS: u64 = 300;
    /// Default upload delay in milliseconds.
    pub const DEFAULT_UPLOAD_MS: u64 = 600;

    /// Profile with every delay set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            login: Duration::ZERO,
            read: Duration::ZERO,
            write: Duration::ZERO,
            upload: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(Self::DEFAULT_LOGIN_MS),
            read: Duration::from_millis(Self::DEFAULT_READ_MS),
            write: Duration::from_millis(Self::DEFAULT_WRITE_MS),
            upload: Duration::from_millis(Self::DEFAULT_UPLOAD_MS),
        }
    }
}
