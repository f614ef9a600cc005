//! Repository trait for URL mapping storage.

use crate::domain::entities::{Mapping, NewMapping};
use async_trait::async_trait;

/// Errors surfaced by a mapping store.
///
/// Callers never see more than "storage failed"; the detail is for logs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage operation timed out")]
    Timeout,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("token already in use: {0}")]
    TokenCollision(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Access contract for persisted URL mappings.
///
/// All lookups are case-insensitive exact matches. The store itself does not
/// enforce uniqueness of `original_url`; deduplication is the caller's
/// check-then-insert and is not atomic across concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - in-process fake
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Finds the first mapping whose `original_url` equals `url`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be queried.
    async fn find_by_original(&self, url: &str) -> Result<Option<Mapping>, StoreError>;

    /// Finds the mapping whose `short_url` equals `token`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be queried.
    async fn find_by_short(&self, token: &str) -> Result<Option<Mapping>, StoreError>;

    /// Persists a new mapping and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TokenCollision`] if `short_url` is already taken
    /// (compared case-insensitively), or another [`StoreError`] on failure.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
