//! Data Transfer Objects for REST request/response serialization.
//!
//! Wire fields use camelCase (`wattCapacity`, `minCapacity`); entity
//! timestamps serialize in the fixed `yyyy-MM-dd HH:mm:ss` UTC format.

pub mod battery_dto;
pub mod common_dto;

pub use battery_dto::*;
pub use common_dto::*;
