pub mod whatsapp;

// Re-export shared services for easier access
pub use whatsapp as whatsapp_service;
