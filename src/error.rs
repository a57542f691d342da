//! Application error type and its HTTP mapping.
//!
//! Every fallible handler returns [`AppError`], which renders as
//!
//! ```json
//! { "success": false, "error": "Debug log entry not found", "code": "not_found" }
//! ```
//!
//! with an optional `details` object when the variant carries one.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input. Maps to 400.
    Validation { message: String, details: Value },
    /// Referenced record does not exist. Maps to 404.
    NotFound { message: String, details: Value },
    /// A store or backend could not be reached or rejected the call. Maps to 500.
    Dependency { message: String, details: Value },
    /// Anything unexpected. Maps to 500 with a generic message.
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn dependency(message: impl Into<String>, details: Value) -> Self {
        Self::Dependency {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error renders with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Dependency { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Human-readable message carried by the error.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Dependency { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Dependency { message, details } => {
                tracing::error!(%message, %details, "Dependency failure");
                ("dependency_error", message, details)
            }
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Internal error");
                (
                    "internal_error",
                    "Internal server error".to_string(),
                    Value::Null,
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
            code,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::dependency("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = render(AppError::not_found(
            "Debug log entry not found",
            Value::Null,
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Debug log entry not found");
        assert_eq!(body["code"], "not_found");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_validation_keeps_details() {
        let (status, body) =
            render(AppError::bad_request("id is required", json!({"field": "id"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "id");
    }

    #[tokio::test]
    async fn test_internal_hides_message() {
        let (status, body) =
            render(AppError::internal("stack overflow in probe", json!({}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_dependency_is_500() {
        let (status, body) =
            render(AppError::dependency("Database error", json!({"reason": "refused"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "dependency_error");
        assert_eq!(body["details"]["reason"], "refused");
    }
}
