//! API route configuration.

use crate::api::handlers::{missing_token_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`         - Shorten a URL (form field `url`)
/// - `GET  /shorturl`         - Missing token, answers 400
/// - `GET  /shorturl/{token}` - Redirect to the original URL
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorturl",
            post(shorten_handler).get(missing_token_handler),
        )
        .route("/shorturl/{token}", get(redirect_handler))
}
