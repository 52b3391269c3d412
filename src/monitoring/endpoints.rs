use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::state::AppState;

/// Create monitoring router with health endpoints
pub fn monitoring_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
}

/// Basic health check endpoint
async fn health_check() -> impl IntoResponse {
    let health = serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health))
}

/// Liveness probe (Kubernetes style)
async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
