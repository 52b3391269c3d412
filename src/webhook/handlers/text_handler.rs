use crate::{
    domains::{
        catalog_service,
        reply_service::{route_text, Reply},
    },
    shared::whatsapp_service,
    state::AppState,
};
use std::sync::Arc;
use tracing::{error, info};

/// Answers a free-text message with a canned reply or the service menu.
pub async fn handle_text_message(app_state: &Arc<AppState>, from: &str, text_body: &str) {
    info!("Routing text message from {}: '{}'", from, text_body);

    match route_text(text_body) {
        Reply::ServiceMenu => catalog_service::send_service_menu(app_state, from).await,
        Reply::Text(reply) => {
            if let Err(e) = whatsapp_service::send_text_message(app_state, from, reply).await {
                error!("❌ [{}] Failed to reply to {}: {}", e.error_code(), from, e);
            }
        }
    }
}
