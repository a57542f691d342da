//! Debug log entity reported by clients for later triage.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Accepted severity levels for debug log entries.
pub const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error"];

/// A debug log entry.
///
/// Entries start unresolved. Resolving sets `resolved` and stamps
/// `resolved_at` once; resolving again leaves the record unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugLog {
    pub id: String,
    pub level: String,
    pub message: String,
    pub context: Option<Value>,
    pub resolved: bool,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl DebugLog {
    pub fn new(
        id: String,
        level: String,
        message: String,
        context: Option<Value>,
        resolved: bool,
        resolved_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            level,
            message,
            context,
            resolved,
            resolved_at,
            created_at,
        }
    }

    /// Marks the entry resolved, keeping the first resolution time.
    pub fn mark_resolved(&mut self, at: DateTime<Utc>) {
        if !self.resolved {
            self.resolved = true;
            self.resolved_at = Some(at);
        }
    }
}

/// Input data for recording a new debug log entry.
#[derive(Debug, Clone)]
pub struct NewDebugLog {
    pub level: String,
    pub message: String,
    pub context: Option<Value>,
}

/// Result of a resolve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutcome {
    pub id: String,
    pub resolved: bool,
}

impl From<&DebugLog> for ResolveOutcome {
    fn from(log: &DebugLog) -> Self {
        Self {
            id: log.id.clone(),
            resolved: log.resolved,
        }
    }
}

/// Listing filter for debug log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugLogFilter {
    /// `Some(false)` lists open entries only, `Some(true)` resolved ones.
    pub resolved: Option<bool>,
    pub limit: i64,
}

impl Default for DebugLogFilter {
    fn default() -> Self {
        Self {
            resolved: None,
            limit: 50,
        }
    }
}
