use crate::error::EventError;
use crate::models::{parse_event, InboundEvent, MessageContent, ParsedEvent};
use crate::security::{verify_signature, SIGNATURE_HEADER};
use crate::state::AppState;
use crate::webhook::handlers::{interactive_handler, text_handler};
use axum::http::HeaderMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a recognized event was handled. Outbound failures are logged where
/// they happen and do not change the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Replied,
    SelfEcho,
    NoMessages,
    Unsupported,
}

/// Authenticates, parses and dispatches one webhook delivery.
pub async fn process_webhook(
    state: &Arc<AppState>,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<EventOutcome, EventError> {
    if let Some(app_secret) = state.config.whatsapp.app_secret.as_deref() {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if !verify_signature(app_secret, body, signature) {
            return Err(EventError::InvalidSignature);
        }
    }

    match parse_event(body)? {
        ParsedEvent::NoMessages => {
            debug!("Webhook event without messages (status callback)");
            Ok(EventOutcome::NoMessages)
        }
        ParsedEvent::Message(event) => Ok(dispatch(state, event).await),
    }
}

async fn dispatch(state: &Arc<AppState>, event: InboundEvent) -> EventOutcome {
    if event.is_self_echo() {
        debug!("Ignoring message echoed from our own number {}", event.bot_number);
        return EventOutcome::SelfEcho;
    }

    info!(
        "✅ Processing message {} from {}",
        event.message_id.as_deref().unwrap_or("-"),
        event.from
    );

    match &event.content {
        MessageContent::Text(body) => {
            text_handler::handle_text_message(state, &event.from, body).await;
            EventOutcome::Replied
        }
        MessageContent::ListSelection(service_id) => {
            interactive_handler::handle_interactive_message(state, &event.from, service_id).await;
            EventOutcome::Replied
        }
        MessageContent::Unsupported => {
            warn!("Tipo de mensaje no soportado recibido de {}", event.from);
            EventOutcome::Unsupported
        }
    }
}
