use crate::config::Config;
use crate::domains::catalog::ServiceCatalog;
use crate::error::Result;
use reqwest::Client as ReqwestClient;

/// Estado compartido de la aplicación.
/// Everything here is read-only after startup, so handlers share it through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http_client: ReqwestClient,
    pub catalog: ServiceCatalog,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_catalog(config, ServiceCatalog::builtin()?)
    }

    pub fn with_catalog(config: Config, catalog: ServiceCatalog) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.http_timeout())
            .build()?;

        tracing::info!(
            "✅ AppState ready: {} catalog entries, signature check {}",
            catalog.len(),
            if config.whatsapp.app_secret.is_some() { "enabled" } else { "disabled" }
        );

        Ok(AppState {
            config,
            http_client,
            catalog,
        })
    }
}
