//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::MappingRepository`]
//! trait and provide the two request protocols to HTTP handlers and the
//! admin CLI.
//!
//! # Available Services
//!
//! - [`services::ShortenService`] - Validate, deduplicate and create mappings
//! - [`services::ResolveService`] - Resolve a token back to its URL

pub mod services;
