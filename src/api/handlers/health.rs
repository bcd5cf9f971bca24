//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": { "ok": true }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = match state.health.ping().await {
        Ok(()) => CheckStatus {
            ok: true,
            message: None,
        },
        Err(e) => CheckStatus {
            ok: false,
            message: Some(format!("Database error: {e}")),
        },
    };

    let healthy = database.ok;
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    };

    if healthy {
        Ok(Json(response))
    } else {
        tracing::warn!("Health check failed");
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
