//! Token resolution service.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use super::{DEFAULT_STORE_TIMEOUT, with_deadline};
use crate::domain::repositories::{MappingRepository, StoreError};

/// Failure of a resolve request.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("short URL token is missing")]
    BadRequest,

    #[error("no URL found for token")]
    NotFound,

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Resolves short tokens to their original URLs. Never mutates the store.
pub struct ResolveService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R: MappingRepository + ?Sized> ResolveService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Sets the deadline applied to each store call.
    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Returns the original URL for `token`, matched case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::BadRequest`] if `token` is blank; the store is not queried
    /// - [`ResolveError::NotFound`] if no mapping has this token
    /// - [`ResolveError::Storage`] if the lookup fails or exceeds its deadline
    pub async fn resolve(&self, token: &str) -> Result<String, ResolveError> {
        if token.trim().is_empty() {
            return Err(ResolveError::BadRequest);
        }

        let mapping = with_deadline(self.store_timeout, self.repository.find_by_short(token))
            .await
            .inspect_err(|e| error!(token = %token, error = %e, "Lookup by token failed"))?;

        match mapping {
            Some(mapping) => {
                debug!(token = %token, url = %mapping.original_url, "Resolved token");
                Ok(mapping.original_url)
            }
            None => {
                debug!(token = %token, "No URL found");
                Err(ResolveError::NotFound)
            }
        }
    }
}
