//! vpp-gateway server entry point.
//!
//! Starts the Axum HTTP server with the battery REST endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vpp_gateway::api;
use vpp_gateway::app_state::AppState;
use vpp_gateway::config::GatewayConfig;
use vpp_gateway::service::BatteryService;
use vpp_gateway::storage::InMemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting vpp-gateway");

    // Build storage and service layers
    let store = Arc::new(InMemoryStore::new());
    let battery_service = Arc::new(BatteryService::new(store));

    // Build application state
    let app_state = AppState {
        battery_service,
        config: config.clone(),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        )
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
