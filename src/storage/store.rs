//! Storage abstraction consumed by the service layer.
//!
//! [`BatteryStore`] is the seam between business logic and persistence:
//! the service is generic over it, so tests can substitute a recording
//! store and production wires in [`super::InMemoryStore`].

use crate::domain::{Battery, BatteryDraft, BatteryId};

/// Failure surfaced by a storage implementation.
///
/// The service never leaks this type to callers; it wraps each failure
/// with context naming the operation that failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// An insert collided with an existing identifier.
    #[error("duplicate battery id: {0}")]
    DuplicateId(BatteryId),

    /// The referenced record does not exist.
    #[error("battery not found: {0}")]
    Missing(BatteryId),
}

/// Pagination request for listing endpoints. 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

/// One page of results plus the total record count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Total number of records across all pages.
    pub total: u32,
}

/// Record store for battery entities.
///
/// All range comparisons are inclusive on both ends. Implementations own
/// identity assignment and the `created_at`/`modified_at` timestamp hooks;
/// callers never set either.
pub trait BatteryStore: Send + Sync {
    /// Inserts a batch of drafts as one operation, assigning ids and
    /// timestamps, and returns the stored records in input order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the batch cannot be inserted; no
    /// partial insert is visible afterwards.
    fn insert_all(
        &self,
        drafts: Vec<BatteryDraft>,
    ) -> impl Future<Output = Result<Vec<Battery>, StoreError>> + Send;

    /// Point lookup by id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on storage failure.
    fn find_by_id(
        &self,
        id: BatteryId,
    ) -> impl Future<Output = Result<Option<Battery>, StoreError>> + Send;

    /// Existence check by id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on storage failure.
    fn exists_by_id(&self, id: BatteryId) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Removes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] if no record has that id.
    fn delete_by_id(&self, id: BatteryId) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Persists an already-identified record, refreshing `modified_at`,
    /// and returns the stored view.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] if the record was never inserted.
    fn save(&self, battery: Battery) -> impl Future<Output = Result<Battery, StoreError>> + Send;

    /// Paginated listing in a deterministic order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on storage failure.
    fn find_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<Page<Battery>, StoreError>> + Send;

    /// Records with postcode in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on storage failure.
    fn find_by_postcode_between(
        &self,
        from: i32,
        to: i32,
    ) -> impl Future<Output = Result<Vec<Battery>, StoreError>> + Send;

    /// Records with postcode in `[from, to]` and capacity in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on storage failure.
    fn find_by_postcode_and_capacity_between(
        &self,
        from: i32,
        to: i32,
        min: i64,
        max: i64,
    ) -> impl Future<Output = Result<Vec<Battery>, StoreError>> + Send;

    /// Records with postcode in `[from, to]` and capacity `>= min`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on storage failure.
    fn find_by_postcode_and_capacity_at_least(
        &self,
        from: i32,
        to: i32,
        min: i64,
    ) -> impl Future<Output = Result<Vec<Battery>, StoreError>> + Send;

    /// Records with postcode in `[from, to]` and capacity `<= max`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on storage failure.
    fn find_by_postcode_and_capacity_at_most(
        &self,
        from: i32,
        to: i32,
        max: i64,
    ) -> impl Future<Output = Result<Vec<Battery>, StoreError>> + Send;
}
