//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{DatabaseCheck, HealthChecks, HealthResponse};
use crate::application::services::with_deadline;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: the mapping store answers
/// - **503 Service Unavailable**: the mapping store is unreachable or does not
///   answer within the store timeout
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 42 mappings" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let healthy = db_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database: db_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks store connectivity and reports the mapping count.
async fn check_database(state: &AppState) -> DatabaseCheck {
    let deadline = state.store_timeout;
    let result = match with_deadline(deadline, state.repository.ping()).await {
        Ok(()) => with_deadline(deadline, state.repository.count()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(count) => DatabaseCheck {
            status: "ok",
            message: format!("Connected, {} mappings", count),
        },
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            DatabaseCheck {
                status: "error",
                message: "Database unreachable".to_string(),
            }
        }
    }
}
