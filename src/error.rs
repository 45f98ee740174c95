//! Error types for the link store and the HTTP boundary.
//!
//! A duplicate short code is not an error: registration reports it as
//! [`crate::domain::entities::Registration::Conflict`]. The types here cover
//! invalid input and infrastructure failures only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures raised by a [`crate::domain::repositories::LinkStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("link store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("failed to prepare link store schema: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("unsupported storage backend: {0}")]
    UnsupportedBackend(String),

    #[error("invalid short link: {0}")]
    InvalidLink(String),
}

impl StoreError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidLink(reason.into())
    }
}

/// Errors returned by page handlers.
///
/// Rendered as HTML pages. Internal details are logged, never sent to the client.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            // Malformed input can never match a stored link.
            StoreError::InvalidLink(_) => AppError::NotFound,
            other => AppError::internal(other.to_string()),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NotFoundTemplate {}).into_response(),
            AppError::Internal { message } => {
                tracing::error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorTemplate {}).into_response()
            }
        }
    }
}
