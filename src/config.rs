//! Configuration management for the responder

use crate::error::{AppError, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://graph.facebook.com/v20.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub whatsapp: WhatsAppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    pub access_token: String,
    pub phone_number_id: String,
    pub verify_token: String,
    /// Meta app secret; when set, inbound payloads must carry a valid `X-Hub-Signature-256`.
    pub app_secret: Option<String>,
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
    pub http_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("WHATSAPP_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Ok(Config {
            whatsapp: WhatsAppConfig {
                access_token: required("WHATSAPP_ACCESS_TOKEN")?,
                phone_number_id: required("WHATSAPP_PHONE_NUMBER_ID")?,
                verify_token: required("WHATSAPP_VERIFY_TOKEN")?,
                app_secret: env::var("WHATSAPP_APP_SECRET")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                api_base_url: normalize_base_url(&api_base_url)?,
            },
            server: ServerConfig {
                port: parse_or("PORT", 5000)?,
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
                http_timeout_seconds: parse_or("HTTP_CLIENT_TIMEOUT_SECONDS", 30)?,
            },
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.server.http_timeout_seconds)
    }
}

impl WhatsAppConfig {
    pub fn messages_url(&self) -> String {
        format!("{}/{}/messages", self.api_base_url, self.phone_number_id)
    }
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::configuration(format!("{} must be set", key))),
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("{} has an invalid value: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

/// Validates the Graph API base URL and strips any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|e| AppError::configuration(format!("WHATSAPP_API_BASE_URL is not a valid URL: {}", e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::configuration(format!(
            "WHATSAPP_API_BASE_URL must use http or https, got {}",
            parsed.scheme()
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let url = normalize_base_url("https://graph.facebook.com/v20.0/").unwrap();
        assert_eq!(url, "https://graph.facebook.com/v20.0");
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("ftp://graph.facebook.com").is_err());
    }

    #[test]
    fn test_messages_url() {
        let cfg = WhatsAppConfig {
            access_token: "token".into(),
            phone_number_id: "1234567890".into(),
            verify_token: "verify".into(),
            app_secret: None,
            api_base_url: "http://127.0.0.1:9999".into(),
        };
        assert_eq!(cfg.messages_url(), "http://127.0.0.1:9999/1234567890/messages");
    }
}
