//! REST API over the tariff calculator.
//!
//! Provides four GET endpoints:
//! - `/tariff`: the buyback schedule
//! - `/revenue`: buyback revenue for a production and capacity
//! - `/metrics`: project metrics, inputs defaulting to the loaded scenario
//! - `/curve`: revenue curve over the configured capacity range

mod handlers;
/// Request and response types.
pub mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::config::ScenarioConfig;
use crate::tariff::TariffSchedule;

/// Immutable application state shared across all request handlers.
///
/// Every request recomputes its answer from this state and its own query;
/// nothing is written back, so no locks are needed.
pub struct AppState {
    /// Buyback schedule in force.
    pub schedule: TariffSchedule,
    /// Scenario supplying defaults for omitted inputs and the chart range.
    pub scenario: ScenarioConfig,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tariff", get(handlers::get_tariff))
        .route("/revenue", get(handlers::get_revenue))
        .route("/metrics", get(handlers::get_metrics))
        .route("/curve", get(handlers::get_curve))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the
/// server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
