pub mod interactive_handler;
pub mod text_handler;
pub mod webhook_handler;

// Re-export main handlers for easy access
pub use interactive_handler::handle_interactive_message;
pub use text_handler::handle_text_message;
pub use webhook_handler::{get_webhook, post_webhook};
