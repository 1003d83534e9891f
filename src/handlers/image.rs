use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Html,
};

use crate::{
    embed::EmbedPage,
    error::{AppError, AppResult},
    handlers::context::resolve_hostname,
    models::Lookup,
    render,
    state::AppState,
};

/// GET /:slug
///
/// Looks up the image for this slug and host, then the uploader's embed
/// preferences, and renders the embed page. Unknown images redirect to the
/// not-found page without an owner lookup.
pub async fn get_image_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> AppResult<Html<String>> {
    let host = resolve_hostname(state.hostname_override.as_deref(), &headers)
        .ok_or_else(|| AppError::NotFound("no hostname on request".into()))?;

    let image = match state.backend.fetch_image(&slug, &host).await? {
        Lookup::Found(image) => image,
        Lookup::NotFound => {
            return Err(AppError::NotFound(format!("no image {slug} on {host}")));
        }
    };

    let prefs = state.backend.owner_preferences(&image.uploaded_by).await;
    let page = EmbedPage::resolve(image, prefs);
    tracing::debug!(slug = %page.slug, host = %host, video = page.is_video(), "Rendering embed page");

    Ok(Html(render::image_page(&page).into_string()))
}
