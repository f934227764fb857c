//! # vpp-gateway
//!
//! REST gateway for a virtual power plant battery registry.
//!
//! This crate manages a registry of battery records (name, postcode zone,
//! watt capacity) and answers range-filtered aggregate queries over them:
//! given a postcode range and optional capacity bounds, it returns the
//! matched names sorted ascending, the total watt capacity, and the
//! rounded average capacity.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BatteryService (service/)
//!     │
//!     ├── Domain types (domain/)
//!     │
//!     └── BatteryStore (storage/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod storage;
