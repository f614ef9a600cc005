//! HTTP-facing errors and their response bodies.
//!
//! Two wire formats exist. [`ErrorFormat::Legacy`] is the historical contract
//! clients depend on: bare JSON strings, and `200 {"error":"invalid url"}` for
//! rejected URLs. [`ErrorFormat::Structured`] renders every error as
//! `{"error":{"code","message","details"}}` with a matching 4xx/5xx status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::str::FromStr;

use crate::application::services::{ResolveError, ShortenError};

/// Message for a GET without a token.
pub const MISSING_TOKEN_MESSAGE: &str = "Invalid short URL";
/// Message for a POST body that does not carry a `url` field.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
/// Message for an unknown token.
pub const NOT_FOUND_MESSAGE: &str = "No URL found";
/// Message for any storage failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error..";

/// Selects how [`AppError`] is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    #[default]
    Legacy,
    Structured,
}

impl FromStr for ErrorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "structured" => Ok(Self::Structured),
            other => Err(format!(
                "ERROR_FORMAT must be 'legacy' or 'structured', got '{}'",
                other
            )),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload of the structured format.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid url")]
    InvalidUrl { details: Value },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound { details: Value },

    #[error("{}", SERVER_ERROR_MESSAGE)]
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Returns the structured payload for this error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::InvalidUrl { details } => ("invalid_url", details.clone()),
            AppError::BadRequest { .. } => ("bad_request", json!({})),
            AppError::NotFound { details } => ("not_found", details.clone()),
            AppError::Internal => ("internal_error", json!({})),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }

    /// Renders the error in the requested format.
    pub fn render(self, format: ErrorFormat) -> Response {
        match format {
            ErrorFormat::Legacy => self.render_legacy(),
            ErrorFormat::Structured => self.render_structured(),
        }
    }

    fn render_legacy(self) -> Response {
        match self {
            AppError::InvalidUrl { .. } => {
                (StatusCode::OK, Json(json!({ "error": "invalid url" }))).into_response()
            }
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, Json(message)).into_response()
            }
            AppError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, Json(NOT_FOUND_MESSAGE)).into_response()
            }
            AppError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(SERVER_ERROR_MESSAGE)).into_response()
            }
        }
    }

    fn render_structured(self) -> Response {
        let status = match self {
            AppError::InvalidUrl { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.render(ErrorFormat::default())
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidUrl(reason) => AppError::InvalidUrl {
                details: json!({ "reason": reason.to_string() }),
            },
            ShortenError::Storage(_) => AppError::Internal,
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::BadRequest => AppError::bad_request(MISSING_TOKEN_MESSAGE),
            ResolveError::NotFound => AppError::NotFound { details: json!({}) },
            ResolveError::Storage(_) => AppError::Internal,
        }
    }
}
