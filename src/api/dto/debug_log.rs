//! DTOs for debug log endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::DebugLog;

/// Level names are single alphabetic words; the accepted set is checked by the service.
static LEVEL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[A-Za-z]+\s*$").unwrap());

/// Request to resolve a debug log entry.
///
/// A missing `id` deserializes as empty and is rejected with 400 by the service.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub id: String,
}

/// Successful resolve response.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub success: bool,
    pub id: String,
    pub resolved: bool,
}

/// Request to record a new debug log entry.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDebugLogRequest {
    #[validate(length(min = 1, max = 16))]
    #[validate(regex(path = "*LEVEL_REGEX"))]
    pub level: String,

    #[validate(length(min = 1, max = 10000))]
    pub message: String,

    /// Arbitrary structured context (request ids, object keys, ...).
    pub context: Option<Value>,
}

/// Query parameters for listing entries.
///
/// Empty values (`?resolved=&limit=`) are treated as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListDebugLogsQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub resolved: Option<bool>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DebugLogListResponse {
    pub items: Vec<DebugLog>,
}
