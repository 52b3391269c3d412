pub mod models;
pub mod service;

// Re-exports para facilitar imports
pub use models::{Brochure, CatalogEntry, ServiceCatalog};
pub use service::{resolve_selection, respond_to_selection, send_service_menu, SelectionReply};
