//! Domain layer: the mapping entity and the storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod repositories;
