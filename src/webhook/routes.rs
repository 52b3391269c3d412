use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers::{get_webhook, post_webhook};

/// Creates the webhook router for WhatsApp endpoints
pub fn create_webhook_router() -> Router<Arc<AppState>> {
    Router::new().route("/webhook", get(get_webhook).post(post_webhook))
}
