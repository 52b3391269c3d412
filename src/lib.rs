use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod domains;
pub mod error;
pub mod models;
pub mod monitoring;
pub mod processing;
pub mod security;
pub mod shared;
pub mod state;
pub mod utils;
pub mod webhook;

use monitoring::monitoring_router;
use state::AppState;
use webhook::create_webhook_router;

/// Webhook deliveries are small JSON documents; anything larger is not ours.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Webhooks de WhatsApp
        .merge(create_webhook_router())
        // Endpoints de monitoreo (sin autenticación)
        .merge(monitoring_router())
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
