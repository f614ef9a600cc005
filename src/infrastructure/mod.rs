//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - Mapping repository implementations

pub mod persistence;
