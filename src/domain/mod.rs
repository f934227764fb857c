//! Domain layer: battery entity, identity, and range query types.
//!
//! This module contains the server-side domain model: battery identity,
//! the battery record itself, and the range query / statistics types the
//! service layer operates on.

pub mod battery;
pub mod battery_id;
pub mod range_query;

pub use battery::{Battery, BatteryDraft};
pub use battery_id::BatteryId;
pub use range_query::{BatteryStatistics, CapacityBounds, RangeQuery};
