//! Business logic services for the application layer.

pub mod resolve_service;
pub mod shorten_service;

pub use resolve_service::{ResolveError, ResolveService};
pub use shorten_service::{ShortenError, ShortenService};

use std::future::Future;
use std::time::Duration;

use crate::domain::repositories::StoreError;

/// Store deadline used when a service is built without an explicit one.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs a store operation, failing with [`StoreError::Timeout`] once `deadline` elapses.
pub async fn with_deadline<T, F>(deadline: Duration, op: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(deadline, op)
        .await
        .map_err(|_| StoreError::Timeout)?
}
