//! Handlers for debug log endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::debug_log::{
    CreateDebugLogRequest, DebugLogListResponse, ListDebugLogsQuery, ResolveRequest,
    ResolveResponse,
};
use crate::domain::entities::DebugLog;
use crate::error::AppError;
use crate::state::AppState;

/// Marks a debug log entry as resolved.
///
/// # Endpoint
///
/// `POST /api/debug-logs/resolve`
///
/// # Request Body
///
/// ```json
/// { "id": "abc123" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "id": "abc123", "resolved": true }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: `id` missing or empty
/// - **404 Not Found**: `{"success": false, "error": "Debug log entry not found", ...}`
/// - **500 Internal Server Error**: store unavailable
pub async fn resolve_debug_log_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    let outcome = state.debug_log_service.resolve(&payload.id).await?;

    Ok(Json(ResolveResponse {
        success: true,
        id: outcome.id,
        resolved: outcome.resolved,
    }))
}

/// Records a new debug log entry.
///
/// # Endpoint
///
/// `POST /api/debug-logs`
///
/// # Request Body
///
/// ```json
/// { "level": "error", "message": "upload failed", "context": { "key": "videos/1.mp4" } }
/// ```
///
/// Returns **201 Created** with the stored entry.
pub async fn create_debug_log_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateDebugLogRequest>,
) -> Result<(StatusCode, Json<DebugLog>), AppError> {
    payload.validate()?;

    let log = state
        .debug_log_service
        .create(&payload.level, payload.message, payload.context)
        .await?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// Lists debug log entries, newest first.
///
/// # Endpoint
///
/// `GET /api/debug-logs?resolved=false&limit=50`
pub async fn list_debug_logs_handler(
    State(state): State<AppState>,
    Query(query): Query<ListDebugLogsQuery>,
) -> Result<Json<DebugLogListResponse>, AppError> {
    let items = state
        .debug_log_service
        .list(query.resolved, query.limit)
        .await?;

    Ok(Json(DebugLogListResponse { items }))
}

/// Returns a single entry.
///
/// # Endpoint
///
/// `GET /api/debug-logs/{id}`
pub async fn get_debug_log_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DebugLog>, AppError> {
    let log = state.debug_log_service.get(&id).await?;
    Ok(Json(log))
}
