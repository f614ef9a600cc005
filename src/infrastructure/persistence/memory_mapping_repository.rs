//! In-process mapping repository.
//!
//! Mirrors the PostgreSQL semantics (case-insensitive lookups, first match by
//! id, unique tokens) without a database, so handlers and the router can be
//! tested without PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, StoreError};

#[derive(Default)]
struct Rows {
    next_id: i64,
    mappings: Vec<Mapping>,
}

/// Mapping store held in memory. Contents are lost on drop.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    rows: RwLock<Rows>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all stored mappings in insertion order.
    pub async fn all(&self) -> Vec<Mapping> {
        self.rows.read().await.mappings.clone()
    }
}

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_original(&self, url: &str) -> Result<Option<Mapping>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .mappings
            .iter()
            .find(|m| same_text(&m.original_url, url))
            .cloned())
    }

    async fn find_by_short(&self, token: &str) -> Result<Option<Mapping>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .mappings
            .iter()
            .find(|m| same_text(&m.short_url, token))
            .cloned())
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        let mut rows = self.rows.write().await;

        if rows
            .mappings
            .iter()
            .any(|m| same_text(&m.short_url, &new_mapping.short_url))
        {
            return Err(StoreError::TokenCollision(new_mapping.short_url));
        }

        rows.next_id += 1;
        let mapping = Mapping::new(
            rows.next_id,
            new_mapping.original_url,
            new_mapping.short_url,
            Utc::now(),
        );
        rows.mappings.push(mapping.clone());

        Ok(mapping)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.rows.read().await.mappings.len() as i64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_mapping(url: &str, token: &str) -> NewMapping {
        NewMapping {
            original_url: url.to_string(),
            short_url: token.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryMappingRepository::new();

        let first = repo
            .insert(new_mapping("https://a.example", "aaa111"))
            .await
            .unwrap();
        let second = repo
            .insert(new_mapping("https://b.example", "bbb222"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_by_original_ignores_case() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://Example.com/Page", "tok123"))
            .await
            .unwrap();

        let found = repo
            .find_by_original("HTTPS://EXAMPLE.COM/page")
            .await
            .unwrap();
        assert_eq!(found.unwrap().short_url, "tok123");

        assert!(
            repo.find_by_original("https://example.com/other")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_find_by_original_returns_first_match() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://dup.example", "first1"))
            .await
            .unwrap();
        repo.insert(new_mapping("https://DUP.example", "second2"))
            .await
            .unwrap();

        let found = repo.find_by_original("https://dup.example").await.unwrap();
        assert_eq!(found.unwrap().short_url, "first1");
    }

    #[tokio::test]
    async fn test_find_by_short_ignores_case() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://example.com", "abc123"))
            .await
            .unwrap();

        for token in ["abc123", "ABC123", "AbC123"] {
            let found = repo.find_by_short(token).await.unwrap();
            assert_eq!(found.unwrap().original_url, "https://example.com");
        }
        assert!(repo.find_by_short("abc124").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_token_collision() {
        let repo = InMemoryMappingRepository::new();
        repo.insert(new_mapping("https://a.example", "same12"))
            .await
            .unwrap();

        let result = repo.insert(new_mapping("https://b.example", "SAME12")).await;

        assert!(matches!(result, Err(StoreError::TokenCollision(_))));
        assert_eq!(repo.all().await.len(), 1);
    }
}
