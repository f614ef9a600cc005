//! Handlers for short URL resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a token to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{token}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` is the original URL, percent-encoded
/// - **404 Not Found**: no mapping for this token
/// - **500 Internal Server Error**: storage failure
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Response {
    resolve_token(&state, &token).await
}

/// Handles `GET /api/shorturl` with no token.
///
/// Answers 400 `"Invalid short URL"` without touching the store.
pub async fn missing_token_handler(State(state): State<AppState>) -> Response {
    resolve_token(&state, "").await
}

async fn resolve_token(state: &AppState, token: &str) -> Response {
    let target = match state.resolve_service.resolve(token).await {
        Ok(target) => target,
        Err(e) => return AppError::from(e).render(state.error_format),
    };

    match HeaderValue::from_str(&location_for(&target)) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            error!(token = %token, error = %e, "Stored URL is not a valid Location header");
            AppError::Internal.render(state.error_format)
        }
    }
}

/// ASCII form of a stored URL for the `Location` header.
///
/// Non-ASCII paths are percent-encoded and hosts converted to punycode; the
/// stored text itself is left untouched.
fn location_for(target: &str) -> String {
    match Url::parse(target) {
        Ok(url) => url.into(),
        Err(_) => target.to_string(),
    }
}
