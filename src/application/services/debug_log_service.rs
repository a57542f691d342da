//! Debug log triage service.

use crate::domain::entities::{DebugLog, DebugLogFilter, LOG_LEVELS, NewDebugLog, ResolveOutcome};
use crate::domain::repositories::DebugLogRepository;
use crate::error::AppError;
use crate::utils::id_generator::{generate_id, normalize_id};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

/// Default and maximum page sizes for [`DebugLogService::list`].
pub const DEFAULT_LIST_LIMIT: i64 = 50;
pub const MAX_LIST_LIMIT: i64 = 500;

/// Service for recording and resolving debug log entries.
///
/// Resolution is a pass-through to the store: validate the id, mark the
/// entry resolved, and map a missing entry to [`AppError::NotFound`].
pub struct DebugLogService<R: DebugLogRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: DebugLogRepository + ?Sized> DebugLogService<R> {
    /// Creates a new debug log service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Marks an entry resolved.
    ///
    /// Resolving an entry that is already resolved succeeds and leaves the
    /// record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is empty.
    /// Returns [`AppError::NotFound`] if no entry has this id; the store is not modified.
    /// Returns [`AppError::Dependency`] on storage errors.
    pub async fn resolve(&self, id: &str) -> Result<ResolveOutcome, AppError> {
        let id = normalize_id(id)?;

        let log = self
            .repository
            .mark_resolved(id)
            .await?
            .ok_or_else(|| AppError::not_found("Debug log entry not found", json!({"id": id})))?;

        info!("Debug log {} marked resolved", log.id);

        Ok(ResolveOutcome::from(&log))
    }

    /// Records a new unresolved entry.
    ///
    /// # Validation
    ///
    /// - `level` must be one of `debug`, `info`, `warn`, `error` (case-insensitive)
    /// - `message` must not be blank
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Dependency`] on storage errors.
    pub async fn create(
        &self,
        level: &str,
        message: String,
        context: Option<Value>,
    ) -> Result<DebugLog, AppError> {
        let level = level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::bad_request(
                "Invalid log level",
                json!({"level": level, "allowed": LOG_LEVELS}),
            ));
        }

        if message.trim().is_empty() {
            return Err(AppError::bad_request(
                "Message must not be empty",
                json!({"field": "message"}),
            ));
        }

        let id = generate_id()?;
        let log = self
            .repository
            .create(
                id,
                NewDebugLog {
                    level,
                    message,
                    context,
                },
            )
            .await?;

        info!("Debug log {} recorded at level {}", log.id, log.level);

        Ok(log)
    }

    /// Retrieves an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is empty.
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Dependency`] on storage errors.
    pub async fn get(&self, id: &str) -> Result<DebugLog, AppError> {
        let id = normalize_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Debug log entry not found", json!({"id": id})))
    }

    /// Lists entries newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is outside `1..=500`.
    /// Returns [`AppError::Dependency`] on storage errors.
    pub async fn list(
        &self,
        resolved: Option<bool>,
        limit: Option<i64>,
    ) -> Result<Vec<DebugLog>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        if !(1..=MAX_LIST_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                "Limit must be between 1 and 500",
                json!({"min": 1, "max": MAX_LIST_LIMIT, "provided": limit}),
            ));
        }

        self.repository
            .list(DebugLogFilter { resolved, limit })
            .await
    }
}
