pub mod context;
pub mod image;
pub mod pages;

use axum::{
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{error::NOT_FOUND_PATH, state::AppState};

pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "disco-embed",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Application routes without the process-wide layers (tracing, metrics)
/// that `main` adds.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(pages::index))
        .route(NOT_FOUND_PATH, get(pages::not_found))
        .route("/:slug", get(image::get_image_page))
        // Pages reflect the owner's current embed settings.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .with_state(state)
}
