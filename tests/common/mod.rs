// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use scraper::{Html, Selector};
use serde_json::{json, Value};
use tower::ServiceExt;
use url::Url;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use disco_embed::{config::Config, handlers, state::AppState};

pub const TEST_SERVICE_KEY: &str = "test-service-key";
pub const TEST_APP_URL: &str = "https://app.disco.pics";

/// Configuration pointing the backend client at `backend`.
pub fn test_config(backend: &MockServer, hostname_override: Option<&str>) -> Config {
    config_for_base(&backend.uri(), hostname_override)
}

pub fn config_for_base(base_url: &str, hostname_override: Option<&str>) -> Config {
    Config {
        api_base_url: Url::parse(base_url).unwrap(),
        app_url: TEST_APP_URL.to_string(),
        service_key: TEST_SERVICE_KEY.to_string(),
        hostname_override: hostname_override.map(str::to_string),
        upstream_timeout: None,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        is_dev: hostname_override.is_some(),
        is_production: false,
    }
}

pub fn create_test_app(config: &Config) -> Router {
    let state = AppState::from_config(config).unwrap();
    handlers::build_router(state)
}

// ── Backend mocks ────────────────────────────────────────────────────────────

pub fn image_json(slug: &str, img_url: &str, owner: &str) -> Value {
    json!({
        "slug": slug,
        "img_url": img_url,
        "id": "1",
        "uploaded_at": "t",
        "uploaded_by": owner,
    })
}

/// Mount a getImage response for `slug` on `host`, expected exactly `times`.
pub async fn mock_image(backend: &MockServer, slug: &str, host: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/api/getImage"))
        .and(query_param("slug", slug))
        .and(query_param("host", host))
        .respond_with(response)
        .expect(times)
        .mount(backend)
        .await;
}

/// Mount a user response for `owner`, expected exactly `times`.
pub async fn mock_owner(backend: &MockServer, owner: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(query_param("id", owner))
        .and(query_param("key", TEST_SERVICE_KEY))
        .and(query_param("images", "false"))
        .respond_with(response)
        .expect(times)
        .mount(backend)
        .await;
}

/// Any getImage call at all fails the test when the server is dropped.
pub async fn forbid_image_lookup(backend: &MockServer) {
    Mock::given(path("/api/getImage"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(backend)
        .await;
}

/// Any user call at all fails the test when the server is dropped.
pub async fn forbid_owner_lookup(backend: &MockServer) {
    Mock::given(path("/api/user"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(backend)
        .await;
}

pub fn owner_json(user: Value) -> Value {
    json!({ "data": { "user": user } })
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub struct PageResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl PageResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }

    /// `content` of the `meta[property=...]` tag, if present.
    pub fn meta(&self, property: &str) -> Option<String> {
        let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).unwrap();
        self.document()
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string)
    }

    pub fn count(&self, selector: &str) -> usize {
        self.document()
            .select(&Selector::parse(selector).unwrap())
            .count()
    }

    pub fn attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.document()
            .select(&Selector::parse(selector).unwrap())
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }
}

pub async fn get_page(app: Router, uri: &str, host: Option<&str>) -> PageResponse {
    let mut req = Request::builder().method(Method::GET).uri(uri);
    if let Some(host) = host {
        req = req.header(header::HOST, host);
    }
    send(app, req.body(Body::empty()).unwrap()).await
}

async fn send(app: Router, req: Request<Body>) -> PageResponse {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    PageResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
