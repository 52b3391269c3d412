use crate::{domains::catalog_service, state::AppState};
use std::sync::Arc;
use tracing::info;

/// Maneja las selecciones de la lista interactiva de servicios.
pub async fn handle_interactive_message(app_state: &Arc<AppState>, from: &str, list_id: &str) {
    info!("List reply from {}: id='{}'", from, list_id);
    catalog_service::respond_to_selection(app_state, from, list_id).await;
}
