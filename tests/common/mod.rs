#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use shorturl::api::handlers::health_handler;
use shorturl::api::routes::shorturl_routes;
use shorturl::domain::entities::{Mapping, NewMapping};
use shorturl::domain::repositories::{MappingRepository, StoreError};
use shorturl::error::ErrorFormat;
use shorturl::infrastructure::persistence::InMemoryMappingRepository;
use shorturl::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const STORE_TIMEOUT: Duration = Duration::from_secs(2);

/// A store whose every operation fails, as if the database were down.
pub struct FailingRepository;

#[async_trait]
impl MappingRepository for FailingRepository {
    async fn find_by_original(&self, _url: &str) -> Result<Option<Mapping>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_short(&self, _token: &str) -> Result<Option<Mapping>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert(&self, _new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// A store whose operations never complete, as if the database had stalled.
pub struct HangingRepository;

#[async_trait]
impl MappingRepository for HangingRepository {
    async fn find_by_original(&self, _url: &str) -> Result<Option<Mapping>, StoreError> {
        std::future::pending().await
    }

    async fn find_by_short(&self, _token: &str) -> Result<Option<Mapping>, StoreError> {
        std::future::pending().await
    }

    async fn insert(&self, _new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        std::future::pending().await
    }

    async fn count(&self) -> Result<i64, StoreError> {
        std::future::pending().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        std::future::pending().await
    }
}

pub fn create_test_state(format: ErrorFormat) -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());
    let state = AppState::new(repo.clone(), STORE_TIMEOUT, format);
    (state, repo)
}

pub fn create_failing_state(format: ErrorFormat) -> AppState {
    AppState::new(Arc::new(FailingRepository), STORE_TIMEOUT, format)
}

pub fn create_hanging_state(format: ErrorFormat) -> AppState {
    AppState::new(
        Arc::new(HangingRepository),
        Duration::from_millis(50),
        format,
    )
}

pub fn api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", axum::routing::get(health_handler))
        .nest("/api", shorturl_routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

pub async fn create_test_mapping(repo: &InMemoryMappingRepository, url: &str, token: &str) {
    repo.insert(NewMapping {
        original_url: url.to_string(),
        short_url: token.to_string(),
    })
    .await
    .unwrap();
}
