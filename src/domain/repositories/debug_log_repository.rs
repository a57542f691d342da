//! Repository trait for debug log entries.

use crate::domain::entities::{DebugLog, DebugLogFilter, NewDebugLog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for debug log storage.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDebugLogRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryDebugLogRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DebugLogRepository: Send + Sync {
    /// Stores a new, unresolved entry under the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Dependency`] on storage errors.
    async fn create(&self, id: String, new_log: NewDebugLog) -> Result<DebugLog, AppError>;

    /// Finds an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Dependency`] on storage errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<DebugLog>, AppError>;

    /// Lists entries newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Dependency`] on storage errors.
    async fn list(&self, filter: DebugLogFilter) -> Result<Vec<DebugLog>, AppError>;

    /// Marks an entry resolved.
    ///
    /// Returns `Ok(None)` when no entry has this id; nothing is written in that
    /// case. An already-resolved entry is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Dependency`] on storage errors.
    async fn mark_resolved(&self, id: &str) -> Result<Option<DebugLog>, AppError>;
}
