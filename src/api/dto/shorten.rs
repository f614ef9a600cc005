//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Mapping;

/// Form body of `POST /api/shorturl`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    /// The URL to shorten, as submitted.
    pub url: String,
}

/// Successful shorten result, for new and reused mappings alike.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
}

impl From<Mapping> for ShortenResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_url,
        }
    }
}
