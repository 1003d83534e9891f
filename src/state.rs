use std::sync::Arc;

use crate::{backend::BackendClient, config::Config};

/// Shared application state passed to all handlers.
/// Configuration is read once at startup; handlers never touch the
/// environment.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub hostname_override: Option<Arc<str>>,
    pub app_url: Arc<str>,
}

impl AppState {
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Ok(AppState {
            backend: BackendClient::new(
                config.api_base_url.clone(),
                config.service_key.clone(),
                config.upstream_timeout,
            )?,
            hostname_override: config.hostname_override.as_deref().map(Arc::from),
            app_url: Arc::from(config.app_url.as_str()),
        })
    }
}
