//! Health check handler.

use axum::Json;
use axum::Router;
use axum::routing::get;

use crate::handler::response::HealthResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "ytrelay_server::handler::monitors";

/// Liveness probe. No auth, no side effects.
async fn health() -> Json<HealthResponse> {
    tracing::debug!(target: TRACING_TARGET, "health check requested");
    Json(HealthResponse::ok())
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health))
}
