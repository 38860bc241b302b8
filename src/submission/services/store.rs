//! Service layer for the submission lifecycle.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::CreateSubmissionRequest;
use crate::latency::{LatencyProfile, Sleeper, TokioSleeper};
use crate::submission::{
    domain::{
        RecordId, RejectionReason, ReviewDecision, SubmissionDetails, SubmissionDomainError,
        TapConnectionRecord, TapStatus, seed_records,
    },
    ports::{RecordIdSource, StoredRecords, SubmissionRepository, SubmissionRepositoryError},
};

/// Service-level errors for submission operations.
#[derive(Debug, Error)]
pub enum SubmissionStoreError {
    /// No record carries the requested reference.
    #[error("submission not found: {0}")]
    NotFound(RecordId),
    /// Validation or workflow rules rejected the operation.
    #[error(transparent)]
    Domain(#[from] SubmissionDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SubmissionRepositoryError),
}

/// Result type for submission store operations.
pub type SubmissionStoreResult<T> = Result<T, SubmissionStoreError>;

/// Single source of truth for tap-connection records.
///
/// Every operation reads the whole record list and writes it back in full.
/// Operations on one store value are serialised; separate processes sharing
/// the same storage still race, and the last writer wins.
#[derive(Clone)]
pub struct SubmissionStore<R, I, C>
where
    R: SubmissionRepository,
    I: RecordIdSource,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ids: Arc<I>,
    clock: Arc<C>,
    sleeper: Arc<dyn Sleeper>,
    latency: LatencyProfile,
    seed_on_empty: bool,
    document_lock: Arc<Mutex<()>>,
}

impl<R, I, C> SubmissionStore<R, I, C>
where
    R: SubmissionRepository,
    I: RecordIdSource,
    C: Clock + Send + Sync,
{
    /// Creates a store with default simulated latency and seeding enabled.
    #[must_use]
    pub fn new(repository: Arc<R>, ids: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            repository,
            ids,
            clock,
            sleeper: Arc::new(TokioSleeper),
            latency: LatencyProfile::default(),
            seed_on_empty: true,
            document_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Replaces the sleeper and latency profile.
    #[must_use]
    pub fn with_latency(mut self, sleeper: Arc<dyn Sleeper>, latency: LatencyProfile) -> Self {
        self.sleeper = sleeper;
        self.latency = latency;
        self
    }

    /// Enables or disables seeding of empty storage.
    #[must_use]
    pub const fn with_seed_on_empty(mut self, seed_on_empty: bool) -> Self {
        self.seed_on_empty = seed_on_empty;
        self
    }

    /// Returns every record in storage order, newest submission first.
    ///
    /// Empty storage, or a document that is not a JSON array, is
    /// initialised with the demonstration dataset first. Records that fail
    /// to decode individually are left out rather than replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionStoreError::Repository`] when storage fails.
    pub async fn list(&self) -> SubmissionStoreResult<Vec<TapConnectionRecord>> {
        self.sleeper.sleep(self.latency.read).await;
        let _guard = self.document_lock.lock().await;
        self.load_or_seed().await
    }

    /// Returns the record with reference `id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionStoreError::Repository`] when storage fails.
    pub async fn find(&self, id: &RecordId) -> SubmissionStoreResult<Option<TapConnectionRecord>> {
        self.sleeper.sleep(self.latency.read).await;
        let _guard = self.document_lock.lock().await;
        let records = self.load_or_seed().await?;
        Ok(records.into_iter().find(|record| record.id() == id))
    }

    /// Validates and stores a new pending record.
    ///
    /// The store assigns the reference, the `PENDING` status and the capture
    /// timestamp. The record is placed first in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionStoreError::Domain`] when the input is incomplete
    /// or [`SubmissionStoreError::Repository`] when storage fails.
    pub async fn create(
        &self,
        request: CreateSubmissionRequest,
    ) -> SubmissionStoreResult<TapConnectionRecord> {
        let details = SubmissionDetails::new(request.into_new_submission())?;
        self.sleeper.sleep(self.latency.upload).await;

        let _guard = self.document_lock.lock().await;
        let mut records = self.load_or_seed().await?;
        let id = self.ids.next_id(&records);
        let record = TapConnectionRecord::submit(id, details, &*self.clock);
        records.insert(0, record.clone());
        self.repository.save(&records).await?;

        info!(
            record_id = %record.id(),
            household_id = record.household_id(),
            created_by = %record.created_by_user_id(),
            "submission created"
        );
        Ok(record)
    }

    /// Sets the review outcome of record `id`.
    ///
    /// `reason` is required for `REJECTED`; `reason` and `comment` are
    /// ignored for `APPROVED`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionStoreError::NotFound`] for unknown references,
    /// [`SubmissionStoreError::Domain`] when `status` is `PENDING`, a
    /// rejection lacks a reason or the record was already reviewed, and
    /// [`SubmissionStoreError::Repository`] when storage fails.
    pub async fn update_status(
        &self,
        id: &RecordId,
        status: TapStatus,
        reason: Option<&str>,
        comment: Option<&str>,
    ) -> SubmissionStoreResult<TapConnectionRecord> {
        let decision = ReviewDecision::from_parts(status, reason, comment)?;
        self.review(id, decision).await
    }

    /// Approves record `id`.
    ///
    /// # Errors
    ///
    /// See [`Self::review`].
    pub async fn approve(&self, id: &RecordId) -> SubmissionStoreResult<TapConnectionRecord> {
        self.review(id, ReviewDecision::Approve).await
    }

    /// Rejects record `id` with the standard comment.
    ///
    /// # Errors
    ///
    /// See [`Self::review`].
    pub async fn reject(
        &self,
        id: &RecordId,
        reason: RejectionReason,
    ) -> SubmissionStoreResult<TapConnectionRecord> {
        self.review(id, ReviewDecision::reject(reason)).await
    }

    /// Applies `decision` to record `id`, leaving every other field intact.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionStoreError::NotFound`] for unknown references,
    /// [`SubmissionStoreError::Domain`] when the record was already
    /// reviewed, and [`SubmissionStoreError::Repository`] when storage fails.
    pub async fn review(
        &self,
        id: &RecordId,
        decision: ReviewDecision,
    ) -> SubmissionStoreResult<TapConnectionRecord> {
        self.sleeper.sleep(self.latency.write).await;

        let _guard = self.document_lock.lock().await;
        let mut records = self.load_or_seed().await?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| SubmissionStoreError::NotFound(id.clone()))?;
        record.apply_review(decision)?;
        let updated = record.clone();
        self.repository.save(&records).await?;

        info!(
            record_id = %updated.id(),
            status = %updated.status(),
            reason = updated.rejection_reason().map(RejectionReason::label),
            "submission reviewed"
        );
        Ok(updated)
    }

    /// Loads the record list, seeding absent or unreadable storage.
    async fn load_or_seed(&self) -> SubmissionStoreResult<Vec<TapConnectionRecord>> {
        match self.repository.load().await? {
            StoredRecords::Loaded(records) => Ok(records),
            StoredRecords::Absent => self.seed().await,
            StoredRecords::Unreadable { reason } => {
                warn!(%reason, "stored record list is not a JSON array; reinitialising");
                self.seed().await
            }
        }
    }

    async fn seed(&self) -> SubmissionStoreResult<Vec<TapConnectionRecord>> {
        if !self.seed_on_empty {
            return Ok(Vec::new());
        }
        let records = seed_records(self.clock.utc());
        self.repository.save(&records).await?;
        info!(count = records.len(), "seeded empty record store");
        Ok(records)
    }
}
