//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{ResolveService, ShortenService};
use crate::domain::repositories::MappingRepository;
use crate::error::ErrorFormat;

/// Services and settings shared by all requests.
///
/// The store is passed in explicitly, so tests can run the full router over
/// [`crate::infrastructure::persistence::InMemoryMappingRepository`].
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn MappingRepository>>,
    pub resolve_service: Arc<ResolveService<dyn MappingRepository>>,
    pub repository: Arc<dyn MappingRepository>,
    /// Deadline for store calls made outside the services (`/health`).
    pub store_timeout: Duration,
    pub error_format: ErrorFormat,
}

impl AppState {
    /// Builds both services over `repository`, each store call bounded by `store_timeout`.
    pub fn new(
        repository: Arc<dyn MappingRepository>,
        store_timeout: Duration,
        error_format: ErrorFormat,
    ) -> Self {
        let shorten_service =
            Arc::new(ShortenService::new(repository.clone()).with_store_timeout(store_timeout));
        let resolve_service =
            Arc::new(ResolveService::new(repository.clone()).with_store_timeout(store_timeout));

        Self {
            shorten_service,
            resolve_service,
            repository,
            store_timeout,
            error_format,
        }
    }
}
