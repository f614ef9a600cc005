//! Utility functions for token generation, URL processing and error mapping.
//!
//! - [`token_generator`] - Random short token generation
//! - [`url_normalizer`] - URL trimming and validation
//! - [`db_error`] - SQLx error classification

pub mod db_error;
pub mod token_generator;
pub mod url_normalizer;
