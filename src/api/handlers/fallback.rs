//! Fallback for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Renders unknown routes as a JSON 404.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
