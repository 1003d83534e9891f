use std::time::Duration;

use reqwest::{Client as ReqwestClient, StatusCode};
use thiserror::Error;
use url::Url;

use crate::models::{ImageRecord, Lookup, OwnerPreferences, UserResponse};

pub const USER_AGENT: &str = concat!("disco-embed/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Client for the Disco.pics backend API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: ReqwestClient,
    base_url: Url,
    service_key: String,
}

impl BackendClient {
    pub fn new(
        base_url: Url,
        service_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        let mut builder = ReqwestClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(BackendClient {
            http: builder.build()?,
            base_url,
            service_key: service_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// GET /api/getImage?slug=..&host=..
    pub async fn fetch_image(&self, slug: &str, host: &str) -> Result<Lookup<ImageRecord>, ApiError> {
        const ENDPOINT: &str = "/api/getImage";

        let resp = self
            .http
            .get(self.endpoint(ENDPOINT))
            .query(&[("slug", slug), ("host", host)])
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint: ENDPOINT, source })?;

        if resp.status() != StatusCode::OK {
            tracing::debug!(slug, host, status = %resp.status(), "Image lookup returned no image");
            return Ok(Lookup::NotFound);
        }

        let image = resp
            .json::<ImageRecord>()
            .await
            .map_err(|source| ApiError::Decode { endpoint: ENDPOINT, source })?;
        Ok(Lookup::Found(image))
    }

    /// GET /api/user?id=..&key=..&images=false
    pub async fn fetch_owner(&self, owner_id: &str) -> Result<Lookup<OwnerPreferences>, ApiError> {
        const ENDPOINT: &str = "/api/user";

        let resp = self
            .http
            .get(self.endpoint(ENDPOINT))
            .query(&[
                ("id", owner_id),
                ("key", self.service_key.as_str()),
                ("images", "false"),
            ])
            .send()
            .await
            // The request URL carries the service key; keep it out of logs.
            .map_err(|source| ApiError::Request {
                endpoint: ENDPOINT,
                source: source.without_url(),
            })?;

        if resp.status() != StatusCode::OK {
            tracing::debug!(owner_id, status = %resp.status(), "Owner lookup returned no user");
            return Ok(Lookup::NotFound);
        }

        let body = resp.json::<UserResponse>().await.map_err(|source| ApiError::Decode {
            endpoint: ENDPOINT,
            source: source.without_url(),
        })?;
        Ok(Lookup::Found(body.data.user))
    }

    /// Owner preferences for rendering. Any failure degrades to the
    /// all-empty record so the page still renders with default styling.
    pub async fn owner_preferences(&self, owner_id: &str) -> OwnerPreferences {
        match self.fetch_owner(owner_id).await {
            Ok(lookup) => {
                if matches!(lookup, Lookup::NotFound) {
                    tracing::warn!(owner_id, "Owner not found, rendering default embed");
                }
                lookup.unwrap_or_default()
            }
            Err(e) => {
                tracing::warn!(error = %e, owner_id, "Owner lookup failed, rendering default embed");
                OwnerPreferences::default()
            }
        }
    }
}
