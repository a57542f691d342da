//! PostgreSQL implementation of the debug log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{DebugLog, DebugLogFilter, NewDebugLog};
use crate::domain::repositories::DebugLogRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct DebugLogRow {
    id: String,
    level: String,
    message: String,
    context: Option<Value>,
    resolved: bool,
    resolved_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<DebugLogRow> for DebugLog {
    fn from(r: DebugLogRow) -> Self {
        DebugLog::new(
            r.id,
            r.level,
            r.message,
            r.context,
            r.resolved,
            r.resolved_at,
            r.created_at,
        )
    }
}

/// PostgreSQL repository for debug log entries.
///
/// Resolution is a single conditional `UPDATE`: absent ids touch no rows and
/// `resolved_at` is only stamped the first time.
pub struct PgDebugLogRepository {
    pool: Arc<PgPool>,
}

impl PgDebugLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DebugLogRepository for PgDebugLogRepository {
    async fn create(&self, id: String, new_log: NewDebugLog) -> Result<DebugLog, AppError> {
        let row = sqlx::query_as::<_, DebugLogRow>(
            r#"
            INSERT INTO debug_logs (id, level, message, context)
            VALUES ($1, $2, $3, $4)
            RETURNING id, level, message, context, resolved, resolved_at, created_at
            "#,
        )
        .bind(id)
        .bind(new_log.level)
        .bind(new_log.message)
        .bind(new_log.context)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<DebugLog>, AppError> {
        let row = sqlx::query_as::<_, DebugLogRow>(
            r#"
            SELECT id, level, message, context, resolved, resolved_at, created_at
            FROM debug_logs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, filter: DebugLogFilter) -> Result<Vec<DebugLog>, AppError> {
        let rows = sqlx::query_as::<_, DebugLogRow>(
            r#"
            SELECT id, level, message, context, resolved, resolved_at, created_at
            FROM debug_logs
            WHERE ($1::boolean IS NULL OR resolved = $1)
            ORDER BY created_at DESC, id
            LIMIT $2
            "#,
        )
        .bind(filter.resolved)
        .bind(filter.limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn mark_resolved(&self, id: &str) -> Result<Option<DebugLog>, AppError> {
        let row = sqlx::query_as::<_, DebugLogRow>(
            r#"
            UPDATE debug_logs
            SET resolved = TRUE,
                resolved_at = COALESCE(resolved_at, NOW())
            WHERE id = $1
            RETURNING id, level, message, context, resolved, resolved_at, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
