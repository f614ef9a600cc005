//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`], with [`NewMapping`] as its
//! creation input.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
