use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use shorturl::error::ErrorFormat;
use shorturl::infrastructure::persistence::InMemoryMappingRepository;
use shorturl::routes::app_router;
use shorturl::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

fn full_app() -> NormalizePath<Router> {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let state = AppState::new(repo, Duration::from_secs(2), ErrorFormat::Legacy);
    app_router(state, "public", "views/index.html")
}

async fn body_string(body: Body) -> String {
    let bytes = to_bytes(body, 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_missing_token() {
    let response = full_app()
        .oneshot(
            Request::builder()
                .uri("/api/shorturl/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response.into_body()).await, "\"Invalid short URL\"");
}

#[tokio::test]
async fn test_shorten_and_redirect_through_full_router() {
    let app = full_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/shorturl")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("url=https%3A%2F%2Fexample.com%2Fpage%20"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_string(response.into_body()).await).unwrap();
    assert_eq!(json["original_url"], "https://example.com/page");
    let token = json["short_url"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/shorturl/{token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/page"
    );
}

#[tokio::test]
async fn test_cors_headers_present() {
    let response = full_app()
        .oneshot(
            Request::builder()
                .uri("/api/shorturl/unknown")
                .header(header::ORIGIN, "https://other.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_index_page_served() {
    let response = full_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response.into_body()).await.contains("/api/shorturl"));
}

#[tokio::test]
async fn test_static_asset_served() {
    let response = full_app()
        .oneshot(
            Request::builder()
                .uri("/public/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
