//! Response body of `GET /health`.

use serde::Serialize;

/// Overall service status plus the mapping store check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Result of pinging the mapping store.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    /// `ok` or `error`.
    pub status: &'static str,
    pub message: String,
}

impl DatabaseCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
