//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The store cannot be written
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Backend: file" },
///     "registry": { "status": "ok", "message": "3 links" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state);
    let registry_check = CheckStatus::ok(format!("{} links", state.links.len()));

    let all_healthy = store_check.is_ok() && registry_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            registry: registry_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the store with a write and read-back on a scratch key.
fn check_store(state: &AppState) -> CheckStatus {
    let backend = state.links.backend_name();
    match state.links.check_store() {
        Ok(()) => CheckStatus::ok(format!("Backend: {backend}")),
        Err(e) => CheckStatus::error(format!("Backend {backend} is not writable: {e}")),
    }
}
