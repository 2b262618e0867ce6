//! Handlers for the service descriptor and health checks.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{HealthResponse, ReadinessResponse};
use crate::api::dto::service_info::ServiceInfo;
use crate::state::AppState;

/// Describes the service and its endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Liveness probe. Never touches the store.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "timestamp": "2024-01-01T12:00:00.000000Z" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Readiness probe.
///
/// # Endpoint
///
/// `GET /health/ready`
///
/// # Response Codes
///
/// - **200 OK**: `{"status":"ready","database":"ok"}`
/// - **503 Service Unavailable**: store unreachable, `database` carries the reason
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    match state.link_service.ping().await {
        Ok(()) => Ok(Json(ReadinessResponse {
            status: "ready".to_string(),
            database: "ok".to_string(),
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable".to_string(),
                    database: e.public_message(),
                }),
            ))
        }
    }
}
