use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://app.disco.pics";
pub const DEFAULT_APP_URL: &str = "https://app.disco.pics";

/// Hostname used for image lookups when running in development, where the
/// incoming `Host` header points at localhost.
pub const DEV_HOSTNAME: &str = "disco.pics";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend API serving `/api/getImage` and `/api/user`.
    pub api_base_url: Url,
    /// Where the landing page sends visitors.
    pub app_url: String,
    /// Shared secret passed as `key` on owner lookups. Never logged.
    pub service_key: String,
    /// When set, replaces the request's `Host` header for image lookups.
    pub hostname_override: Option<String>,
    pub upstream_timeout: Option<Duration>,
    pub server_host: String,
    pub server_port: u16,
    pub is_dev: bool,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let app_env = env::var("APP_ENV").unwrap_or_default();
        let is_dev = app_env == "development";
        let is_production = app_env == "production";

        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = Url::parse(&api_base_url).map_err(|e| ConfigError::Invalid {
            name: "API_BASE_URL",
            reason: e.to_string(),
        })?;

        let service_key = env::var("GET_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("GET_KEY"))?;

        let hostname_override = env::var("DEV_HOSTNAME")
            .ok()
            .filter(|host| !host.trim().is_empty())
            .or_else(|| is_dev.then(|| DEV_HOSTNAME.to_string()));

        let upstream_timeout = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(secs.parse().map_err(|_| {
                ConfigError::Invalid {
                    name: "UPSTREAM_TIMEOUT_SECS",
                    reason: format!("expected whole seconds, got {secs:?}"),
                }
            })?)),
            Err(_) => None,
        };

        Ok(Config {
            api_base_url,
            app_url: env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            service_key,
            hostname_override,
            upstream_timeout,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            is_dev,
            is_production,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
