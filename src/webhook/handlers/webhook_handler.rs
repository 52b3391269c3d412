use crate::models::whatsapp::WebhookVerification;
use crate::processing::process_webhook;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, warn};

pub const VERIFICATION_REJECTED: &str = "Invalid verification token";

/// Subscription handshake: echo `hub.challenge` back when the token matches.
pub async fn get_webhook(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WebhookVerification>,
) -> impl IntoResponse {
    info!("Received webhook verification request (mode: {:?})", params.hub_mode);

    if params.hub_verify_token.as_deref() == Some(state.config.whatsapp.verify_token.as_str()) {
        let challenge = params.hub_challenge.unwrap_or_default();
        info!("Webhook verification successful. Responding with challenge: {}", challenge);
        return (StatusCode::OK, challenge);
    }

    warn!("Webhook verification failed. Parameters did not match.");
    (StatusCode::FORBIDDEN, VERIFICATION_REJECTED.to_string())
}

/// Event delivery. Always acknowledged with `200 ok` so the platform does not redeliver;
/// anything that cannot be handled is logged here and dropped.
pub async fn post_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("⚠️ Ignoring webhook event, body could not be read: {}", rejection);
            return (StatusCode::OK, "ok");
        }
    };

    info!("📥 Webhook received ({} bytes)", body.len());

    match process_webhook(&state, &headers, &body).await {
        Ok(outcome) => info!("Webhook handled: {:?}", outcome),
        Err(e) => warn!("⚠️ Ignoring webhook event: {}", e),
    }

    (StatusCode::OK, "ok")
}
