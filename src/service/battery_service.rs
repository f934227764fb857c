//! Battery service: range statistics plus record lifecycle orchestration.

use std::sync::Arc;

use crate::domain::{Battery, BatteryDraft, BatteryId, BatteryStatistics, CapacityBounds, RangeQuery};
use crate::error::GatewayError;
use crate::storage::{BatteryStore, Page, PageRequest};

/// Orchestration layer for all battery operations.
///
/// Stateless coordinator: holds only a shared reference to the record
/// store, so concurrent calls never interfere. Every query validates its
/// own parameters before the store is touched; every storage failure is
/// wrapped with the operation that caused it.
#[derive(Debug)]
pub struct BatteryService<S> {
    store: Arc<S>,
}

impl<S> Clone for BatteryService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: BatteryStore> BatteryService<S> {
    /// Creates a new `BatteryService` over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner store.
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Registers a batch of batteries as a single storage call.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BatteryData`] if the batch is empty or the
    /// store rejects the insert.
    pub async fn create_batteries(
        &self,
        drafts: Vec<BatteryDraft>,
    ) -> Result<Vec<Battery>, GatewayError> {
        if drafts.is_empty() {
            return Err(GatewayError::BatteryData(
                "battery request list cannot be empty".to_string(),
            ));
        }

        let batteries = self
            .store
            .insert_all(drafts)
            .await
            .map_err(|e| GatewayError::BatteryData(format!("error saving battery data: {e}")))?;

        tracing::info!(count = batteries.len(), "batteries registered");
        Ok(batteries)
    }

    /// Computes the statistics summary for batteries whose postcode falls
    /// in `[from, to]`, optionally narrowed by capacity bounds.
    ///
    /// Validation happens before any storage access; exactly one of the
    /// four store filters is invoked, chosen by which bounds are present.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidPostcodeRange`] or
    /// [`GatewayError::InvalidCapacityRange`] for inconsistent parameters,
    /// and [`GatewayError::BatteryData`] if the store fails.
    pub async fn statistics_in_range(
        &self,
        query: RangeQuery,
    ) -> Result<BatteryStatistics, GatewayError> {
        query.validate()?;

        let matched = match query.capacity_bounds() {
            CapacityBounds::Both { min, max } => {
                self.store
                    .find_by_postcode_and_capacity_between(query.from, query.to, min, max)
                    .await
            }
            CapacityBounds::MinOnly { min } => {
                self.store
                    .find_by_postcode_and_capacity_at_least(query.from, query.to, min)
                    .await
            }
            CapacityBounds::MaxOnly { max } => {
                self.store
                    .find_by_postcode_and_capacity_at_most(query.from, query.to, max)
                    .await
            }
            CapacityBounds::Unbounded => {
                self.store.find_by_postcode_between(query.from, query.to).await
            }
        }
        .map_err(|e| GatewayError::BatteryData(format!("error retrieving battery data: {e}")))?;

        let stats = summarize(&matched);
        tracing::info!(
            total = stats.total_watt_capacity,
            average = stats.average_watt_capacity,
            matched = matched.len(),
            "range statistics computed"
        );
        Ok(stats)
    }

    /// Looks up a single battery.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BatteryNotFound`] if the id is unknown.
    pub async fn battery_by_id(&self, id: BatteryId) -> Result<Battery, GatewayError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(GatewayError::BatteryNotFound(id))
    }

    /// Overwrites a battery's name, postcode, and capacity, and persists
    /// the result. `modified_at` refreshes via the store's save hook.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BatteryNotFound`] if the id is unknown, or
    /// [`GatewayError::Storage`] if the save fails.
    pub async fn update_battery(
        &self,
        id: BatteryId,
        draft: BatteryDraft,
    ) -> Result<Battery, GatewayError> {
        let mut battery = self.battery_by_id(id).await?;
        battery.apply(&draft);
        let updated = self.store.save(battery).await?;
        tracing::info!(%id, "battery updated");
        Ok(updated)
    }

    /// Removes a battery. The delete primitive is only reached when the
    /// record exists.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::BatteryNotFound`] if the id is unknown, or
    /// [`GatewayError::Storage`] if the delete fails.
    pub async fn delete_battery(&self, id: BatteryId) -> Result<(), GatewayError> {
        if !self.store.exists_by_id(id).await? {
            return Err(GatewayError::BatteryNotFound(id));
        }
        self.store.delete_by_id(id).await?;
        tracing::info!(%id, "battery deleted");
        Ok(())
    }

    /// Paginated listing, delegated directly to the store.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] if the store fails.
    pub async fn list_batteries(&self, request: PageRequest) -> Result<Page<Battery>, GatewayError> {
        Ok(self.store.find_page(request).await?)
    }
}

/// Reduces a match set into its statistics summary.
///
/// Names sort ascending by code point; the average is rounded to two
/// decimal places, half away from zero. An empty set yields the zero
/// summary rather than a NaN average.
fn summarize(matched: &[Battery]) -> BatteryStatistics {
    if matched.is_empty() {
        return BatteryStatistics::empty();
    }

    let mut battery_names: Vec<String> = matched.iter().map(|b| b.name.clone()).collect();
    battery_names.sort();

    let total_watt_capacity: i64 = matched.iter().map(|b| b.watt_capacity).sum();
    #[allow(clippy::cast_precision_loss)]
    let average_watt_capacity =
        (total_watt_capacity as f64 / matched.len() as f64 * 100.0).round() / 100.0;

    BatteryStatistics {
        battery_names,
        total_watt_capacity,
        average_watt_capacity,
    }
}
