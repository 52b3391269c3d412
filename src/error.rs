//! Error types for the responder

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("WhatsApp API error ({status}): {body}")]
    WhatsAppApi { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    pub fn whatsapp_api(status: u16, body: impl Into<String>) -> Self {
        Self::WhatsAppApi {
            status,
            body: body.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Configuration { .. } => "CONFIG_ERROR",
            AppError::Catalog { .. } => "CATALOG_ERROR",
            AppError::WhatsAppApi { .. } => "WHATSAPP_API_ERROR",
            AppError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Reasons an inbound webhook event could not be turned into a message.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("payload signature did not match")]
    InvalidSignature,
}
