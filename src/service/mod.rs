//! Service layer: business logic orchestration.
//!
//! [`BatteryService`] validates range queries, dispatches to the record
//! store's filter variants, and reduces match sets into statistics
//! summaries. It also coordinates the battery lifecycle operations.

pub mod battery_service;

pub use battery_service::BatteryService;
