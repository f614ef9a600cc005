//! URL shortening service.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::{DEFAULT_STORE_TIMEOUT, with_deadline};
use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::token_generator::generate_token;
use crate::utils::url_normalizer::{InvalidUrl, normalize_and_validate};

/// Failure of a shorten request.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] InvalidUrl),

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Creates mappings, reusing the existing token for a URL already stored.
///
/// # Deduplication
///
/// The lookup and the insert are two separate store calls. Two concurrent
/// requests for the same new URL can both miss the lookup and both insert,
/// leaving two mappings for one URL. Later lookups return the older one.
pub struct ShortenService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R: MappingRepository + ?Sized> ShortenService<R> {
    /// Creates a new shortening service.
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

    /// Shortens `raw_url`.
    ///
    /// 1. Trims and validates the URL
    /// 2. Looks for an existing mapping (case-insensitive)
    /// 3. Returns it unchanged if found
    /// 4. Otherwise generates a token and inserts a new mapping
    ///
    /// Performs at most one store read and one store write. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::InvalidUrl`] without touching the store if the
    /// URL is rejected, and [`ShortenError::Storage`] if either store call fails
    /// or exceeds its deadline.
    pub async fn shorten(&self, raw_url: &str) -> Result<Mapping, ShortenError> {
        let url = normalize_and_validate(raw_url).inspect_err(|e| {
            warn!(url = %raw_url, reason = %e, "Rejected URL");
        })?;

        let existing = with_deadline(
            self.store_timeout,
            self.repository.find_by_original(url.as_str()),
        )
        .await
        .inspect_err(|e| error!(url = %url, error = %e, "Lookup by original URL failed"))?;

        if let Some(mapping) = existing {
            debug!(url = %url, short_url = %mapping.short_url, "URL already shortened");
            return Ok(mapping);
        }

        let new_mapping = NewMapping {
            original_url: url.into_string(),
            short_url: generate_token(),
        };

        let mapping = with_deadline(self.store_timeout, self.repository.insert(new_mapping))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to store new mapping"))?;

        info!(
            url = %mapping.original_url,
            short_url = %mapping.short_url,
            "Created mapping"
        );

        Ok(mapping)
    }
}
