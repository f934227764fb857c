//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::service::BatteryService;
use crate::storage::InMemoryStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Battery service for all business logic.
    pub battery_service: Arc<BatteryService<InMemoryStore>>,
    /// Gateway configuration (pagination limits).
    pub config: GatewayConfig,
}
