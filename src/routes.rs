//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                      - Index page
//! - `GET  /public/*`              - Static assets
//! - `GET  /health`                - Health check
//! - `POST /api/shorturl`          - Shorten a URL
//! - `GET  /api/shorturl/{token}`  - Redirect to the original URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin policy
//! - **Path normalization** - Trailing slash handling, so `/api/shorturl/`
//!   is the missing-token case

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/public`
/// - `index_page` - HTML file served at `/`
pub fn app_router(state: AppState, static_dir: &str, index_page: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(index_page))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::shorturl_routes())
        .nest_service("/public", ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
