use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::{backend::ApiError, render};

/// Every not-found outcome redirects here.
pub const NOT_FOUND_PATH: &str = "/404";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] ApiError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(reason) => {
                tracing::debug!(%reason, "Redirecting to not-found page");
                (StatusCode::FOUND, [(header::LOCATION, NOT_FOUND_PATH)]).into_response()
            }
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "Backend API error");
                (
                    StatusCode::BAD_GATEWAY,
                    Html(
                        render::message_page(
                            "Something went wrong",
                            "The image service could not be reached. Try again shortly.",
                        )
                        .into_string(),
                    ),
                )
                    .into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
