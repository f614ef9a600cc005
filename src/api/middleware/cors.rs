//! Cross-origin request policy.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The API is unauthenticated and carries no cookies, so browsers on other
/// origins may call it freely.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
