pub mod handlers;
pub mod routes;

// Re-export main components
pub use handlers::{get_webhook, post_webhook};
pub use routes::create_webhook_router;
