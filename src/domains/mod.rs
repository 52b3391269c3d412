pub mod catalog;
pub mod replies;

// Re-export domain modules for easier access
pub use catalog as catalog_service;
pub use replies as reply_service;
