use crate::{
    domains::catalog::models::ServiceCatalog,
    shared::whatsapp_service,
    state::AppState,
    utils::to_direct_download,
};
use std::sync::Arc;
use tracing::{error, info};

pub const MENU_BODY: &str = "📋 Here are the available services:\n\nPlease select one:";
pub const MENU_BUTTON: &str = "View Services";
pub const MENU_SECTION_TITLE: &str = "Our Services";
pub const UNKNOWN_SERVICE_REPLY: &str = "❌ Sorry, I didn’t recognize that service.";

/// What to send back for a menu selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionReply<'a> {
    pub text: &'a str,
    /// Direct-download link and filename of the brochure, if the service has one.
    pub document: Option<(String, &'a str)>,
}

pub fn resolve_selection<'a>(catalog: &'a ServiceCatalog, service_id: &str) -> SelectionReply<'a> {
    match catalog.get(service_id) {
        Some(entry) => SelectionReply {
            text: &entry.detail,
            document: entry
                .brochure
                .as_ref()
                .map(|b| (to_direct_download(&b.url), b.filename.as_str())),
        },
        None => SelectionReply {
            text: UNKNOWN_SERVICE_REPLY,
            document: None,
        },
    }
}

/// Sends the interactive list with one row per catalog entry.
pub async fn send_service_menu(app_state: &Arc<AppState>, to: &str) {
    let sections = vec![app_state.catalog.to_section(MENU_SECTION_TITLE)];

    if let Err(e) = whatsapp_service::send_interactive_list_message(
        app_state,
        to,
        MENU_BODY,
        MENU_BUTTON,
        sections,
    )
    .await
    {
        error!("❌ [{}] Failed to send service menu to {}: {}", e.error_code(), to, e);
    }
}

/// Replies to a list selection: the detail text first, then the brochure.
/// The sends are independent; a failed text does not stop the document.
pub async fn respond_to_selection(app_state: &Arc<AppState>, to: &str, service_id: &str) {
    let reply = resolve_selection(&app_state.catalog, service_id);

    if app_state.catalog.get(service_id).is_none() {
        info!("Unknown service id '{}' selected by {}", service_id, to);
    }

    if let Err(e) = whatsapp_service::send_text_message(app_state, to, reply.text).await {
        error!("❌ [{}] Failed to send details for '{}' to {}: {}", e.error_code(), service_id, to, e);
    }

    if let Some((link, filename)) = reply.document {
        if let Err(e) =
            whatsapp_service::send_document_message(app_state, to, &link, Some(filename)).await
        {
            error!("❌ [{}] Failed to send brochure for '{}' to {}: {}", e.error_code(), service_id, to, e);
        }
    }
}
