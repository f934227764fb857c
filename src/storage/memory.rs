//! In-memory battery store.
//!
//! [`InMemoryStore`] keeps all records in a `HashMap` behind a
//! [`tokio::sync::RwLock`]: reads run concurrently, each mutation takes
//! the write lock, so a failed batch insert never leaves partial state
//! visible.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use super::store::{BatteryStore, Page, PageRequest, StoreError};
use crate::domain::{Battery, BatteryDraft, BatteryId};

/// Map-backed store for battery records.
///
/// Identity assignment and the `created_at`/`modified_at` hooks live here:
/// `insert_all` stamps both timestamps, `save` refreshes `modified_at`.
///
/// # Concurrency
///
/// - Reads (lookups, range filters, paging) run concurrently.
/// - Mutations are serialized by the write lock, making each call atomic.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    batteries: RwLock<HashMap<BatteryId, Battery>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            batteries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.batteries.read().await.len()
    }

    /// Returns `true` if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.batteries.read().await.is_empty()
    }

    async fn filter(&self, predicate: impl Fn(&Battery) -> bool) -> Vec<Battery> {
        let map = self.batteries.read().await;
        map.values().filter(|b| predicate(b)).cloned().collect()
    }
}

impl BatteryStore for InMemoryStore {
    async fn insert_all(&self, drafts: Vec<BatteryDraft>) -> Result<Vec<Battery>, StoreError> {
        let now = Utc::now();
        let mut map = self.batteries.write().await;
        // Build the whole batch before touching the map so a failure leaves
        // no partial insert visible.
        let mut batch = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let battery = Battery {
                id: BatteryId::new(),
                name: draft.name,
                postcode: draft.postcode,
                watt_capacity: draft.watt_capacity,
                created_at: now,
                modified_at: now,
            };
            if map.contains_key(&battery.id) {
                return Err(StoreError::DuplicateId(battery.id));
            }
            batch.push(battery);
        }
        for battery in &batch {
            map.insert(battery.id, battery.clone());
        }
        Ok(batch)
    }

    async fn find_by_id(&self, id: BatteryId) -> Result<Option<Battery>, StoreError> {
        let map = self.batteries.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: BatteryId) -> Result<bool, StoreError> {
        let map = self.batteries.read().await;
        Ok(map.contains_key(&id))
    }

    async fn delete_by_id(&self, id: BatteryId) -> Result<(), StoreError> {
        let mut map = self.batteries.write().await;
        map.remove(&id).map(|_| ()).ok_or(StoreError::Missing(id))
    }

    async fn save(&self, mut battery: Battery) -> Result<Battery, StoreError> {
        let mut map = self.batteries.write().await;
        if !map.contains_key(&battery.id) {
            return Err(StoreError::Missing(battery.id));
        }
        battery.modified_at = Utc::now();
        map.insert(battery.id, battery.clone());
        Ok(battery)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Battery>, StoreError> {
        let map = self.batteries.read().await;
        let mut all: Vec<Battery> = map.values().cloned().collect();
        // Deterministic order over the HashMap backing.
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        let total = all.len() as u32;
        let start = (request.page.saturating_sub(1) as usize) * request.per_page as usize;
        let items = all
            .into_iter()
            .skip(start)
            .take(request.per_page as usize)
            .collect();

        Ok(Page { items, total })
    }

    async fn find_by_postcode_between(&self, from: i32, to: i32) -> Result<Vec<Battery>, StoreError> {
        Ok(self
            .filter(|b| b.postcode >= from && b.postcode <= to)
            .await)
    }

    async fn find_by_postcode_and_capacity_between(
        &self,
        from: i32,
        to: i32,
        min: i64,
        max: i64,
    ) -> Result<Vec<Battery>, StoreError> {
        Ok(self
            .filter(|b| {
                b.postcode >= from && b.postcode <= to && b.watt_capacity >= min && b.watt_capacity <= max
            })
            .await)
    }

    async fn find_by_postcode_and_capacity_at_least(
        &self,
        from: i32,
        to: i32,
        min: i64,
    ) -> Result<Vec<Battery>, StoreError> {
        Ok(self
            .filter(|b| b.postcode >= from && b.postcode <= to && b.watt_capacity >= min)
            .await)
    }

    async fn find_by_postcode_and_capacity_at_most(
        &self,
        from: i32,
        to: i32,
        max: i64,
    ) -> Result<Vec<Battery>, StoreError> {
        Ok(self
            .filter(|b| b.postcode >= from && b.postcode <= to && b.watt_capacity <= max)
            .await)
    }
}
