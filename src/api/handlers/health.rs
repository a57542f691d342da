//! Handler for the health check endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::api::dto::health::{HealthFailure, HealthResponse};
use crate::domain::health::ServiceStatus;
use crate::state::AppState;

/// Returns the aggregated health of credentials, storage and CDN.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The check ran. Inspect `status` for the verdict; a failing
///   dependency is reported in the body, not through the status code.
/// - **500 Internal Server Error**: The check itself crashed.
///
/// # Response
///
/// ```json
/// {
///   "timestamp": "2026-01-01T12:00:00Z",
///   "status": "degraded",
///   "services": {
///     "cdn": { "status": "degraded", "detail": "CDN domain not configured, serving directly from storage" },
///     "credentials": { "status": "ok", "detail": "credentials configured" },
///     "storage": { "status": "ok", "detail": "bucket 'media-bucket' reachable" }
///   },
///   "environment": "production",
///   "region": "us-east-1",
///   "bucket": "media-bucket",
///   "has_credentials": true
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let aggregator = state.health_aggregator.clone();
    let outcome =
        tokio::spawn(async move { aggregator.perform_full_health_check().await }).await;

    match outcome {
        Ok(report) => {
            let deployment = &state.deployment;
            Json(HealthResponse {
                report,
                environment: deployment.environment.clone(),
                region: deployment.region.clone(),
                bucket: deployment.bucket.clone(),
                has_credentials: deployment.has_credentials,
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Health check task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthFailure {
                    timestamp: Utc::now(),
                    status: ServiceStatus::Error,
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
