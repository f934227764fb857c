//! Storage layer: the battery record store.
//!
//! Defines the [`BatteryStore`] trait the service layer is generic over,
//! plus the map-backed [`InMemoryStore`] used in production wiring.

pub mod memory;
pub mod store;

pub use memory::InMemoryStore;
pub use store::{BatteryStore, Page, PageRequest, StoreError};
