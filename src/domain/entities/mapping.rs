//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A persisted association between an original URL and its short token.
///
/// Mappings are created once and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Mapping {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub original_url: String,
    pub short_url: String,
}
