use crate::{
    error::{AppError, Result},
    models::whatsapp::{
        Action, DocumentMedia, DocumentMessageRequest, InteractiveBody, InteractiveMessage,
        InteractiveMessageRequest, Section, SendMessageResponse, TextMessageRequest,
    },
    state::AppState,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Envía un mensaje de texto a través de la API de WhatsApp.
pub async fn send_text_message(
    app_state: &Arc<AppState>,
    to: &str,
    body: &str,
) -> Result<SendMessageResponse> {
    let request_body = TextMessageRequest::new(to, body);
    post_message(app_state, "text", to, &request_body).await
}

/// Envía un documento (por enlace) a través de la API de WhatsApp.
pub async fn send_document_message(
    app_state: &Arc<AppState>,
    to: &str,
    link: &str,
    filename: Option<&str>,
) -> Result<SendMessageResponse> {
    let request_body = DocumentMessageRequest::new(
        to,
        DocumentMedia {
            link: link.to_string(),
            filename: filename.map(|f| f.to_string()),
            caption: None,
        },
    );
    post_message(app_state, "document", to, &request_body).await
}

/// Envía un mensaje de lista interactiva a través de la API de WhatsApp.
pub async fn send_interactive_list_message(
    app_state: &Arc<AppState>,
    to: &str,
    body_text: &str,
    button_text: &str,
    sections: Vec<Section>,
) -> Result<SendMessageResponse> {
    let body = InteractiveBody::new(body_text);
    let action = Action::new_for_list(button_text, sections);
    let interactive = InteractiveMessage::new_for_list(body, action);

    let request_body = InteractiveMessageRequest::new(to, interactive);
    post_message(app_state, "interactive list", to, &request_body).await
}

async fn post_message<T: Serialize>(
    app_state: &Arc<AppState>,
    kind: &str,
    to: &str,
    request_body: &T,
) -> Result<SendMessageResponse> {
    let whatsapp = &app_state.config.whatsapp;
    let url = whatsapp.messages_url();

    let response = app_state
        .http_client
        .post(&url)
        .bearer_auth(&whatsapp.access_token)
        .json(request_body)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(AppError::whatsapp_api(status.as_u16(), body));
    }

    debug!("WhatsApp {} response: {}", kind, body);
    let parsed: SendMessageResponse = serde_json::from_str(&body)?;

    info!(
        "Successfully sent {} message to {} (id: {})",
        kind,
        to,
        parsed.message_id().unwrap_or("-")
    );
    Ok(parsed)
}
