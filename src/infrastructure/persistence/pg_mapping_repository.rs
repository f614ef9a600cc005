//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::db_error::is_unique_violation_on_token;

/// PostgreSQL repository for URL mappings.
///
/// Case-insensitive matching uses `lower(column) = lower($1)`, which is served
/// by the expression indexes created in `migrations/`.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Pool exhaustion or shutdown means the store is unreachable, not that the
/// query failed.
fn store_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            StoreError::Unavailable(e.to_string())
        }
        other => StoreError::Database(other),
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_original(&self, url: &str) -> Result<Option<Mapping>, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM url_mappings
            WHERE lower(original_url) = lower($1)
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(store_error)?;

        Ok(mapping)
    }

    async fn find_by_short(&self, token: &str) -> Result<Option<Mapping>, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM url_mappings
            WHERE lower(short_url) = lower($1)
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(store_error)?;

        Ok(mapping)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO url_mappings (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, created_at
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_token(&e) {
                StoreError::TokenCollision(new_mapping.short_url.clone())
            } else {
                store_error(e)
            }
        })
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await
        .map_err(store_error)?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_unavailable() {
        assert!(matches!(
            store_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            store_error(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_query_errors_map_to_database() {
        assert!(matches!(
            store_error(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
    }
}
