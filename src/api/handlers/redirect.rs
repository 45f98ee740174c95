//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /short/{code}/`
///
/// # Responses
///
/// - **307 Temporary Redirect** with `Location: <destination>` when the code exists
/// - **404 Not Found** page when it does not
/// - **500** generic error page when the store is unavailable
pub async fn short_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let destination = state
        .resolution_service
        .resolve(&code)
        .await?
        .ok_or_else(|| {
            debug!("Short link '{}' not found", code);
            AppError::NotFound
        })?;

    let location = HeaderValue::from_str(&destination).map_err(|e| {
        AppError::internal(format!(
            "destination for '{}' is not a valid header value: {}",
            code, e
        ))
    })?;

    info!("Short link '{}' -> {}", code, destination);

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
