use axum::{extract::State, http::StatusCode, response::Html};

use crate::{render, state::AppState};

/// GET /
///
/// Sends the visitor on to the app; this host only serves image pages.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::redirect_page(&state.app_url).into_string())
}

/// GET /404
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page().into_string()),
    )
}
