//! Handler for the shorten endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::{AppError, INVALID_BODY_MESSAGE};
use crate::state::AppState;

/// Shortens a URL, or returns the token already issued for it.
///
/// # Endpoint
///
/// `POST /api/shorturl` with a form-encoded `url` field.
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com/page", "short_url": "xY12abcDEF_-" }
/// ```
///
/// # Errors
///
/// In the legacy error format:
/// - invalid URL: 200 `{"error":"invalid url"}`
/// - body without a `url` field: 400 `"Invalid request body"`
/// - storage failure: 500 `"Server error.."`
pub async fn shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!(reason = %rejection, "Malformed shorten request");
            return AppError::bad_request(INVALID_BODY_MESSAGE).render(state.error_format);
        }
    };

    debug!(url = %form.url, "Received URL");

    match state.shorten_service.shorten(&form.url).await {
        Ok(mapping) => Json(ShortenResponse::from(mapping)).into_response(),
        Err(e) => AppError::from(e).render(state.error_format),
    }
}
