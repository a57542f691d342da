//! Process-local debug log repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{DebugLog, DebugLogFilter, NewDebugLog};
use crate::domain::repositories::DebugLogRepository;
use crate::error::AppError;
use serde_json::json;

/// Debug log repository kept in memory.
///
/// Used with `DEBUG_LOG_STORE=memory` and by the HTTP tests. Entries are lost
/// when the process exits.
#[derive(Default)]
pub struct InMemoryDebugLogRepository {
    logs: RwLock<HashMap<String, DebugLog>>,
}

impl InMemoryDebugLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing entries.
    pub fn with_logs(logs: impl IntoIterator<Item = DebugLog>) -> Self {
        Self {
            logs: RwLock::new(logs.into_iter().map(|l| (l.id.clone(), l)).collect()),
        }
    }
}

#[async_trait]
impl DebugLogRepository for InMemoryDebugLogRepository {
    async fn create(&self, id: String, new_log: NewDebugLog) -> Result<DebugLog, AppError> {
        let mut logs = self.logs.write().await;

        if logs.contains_key(&id) {
            return Err(AppError::dependency(
                "Duplicate debug log id",
                json!({ "id": id }),
            ));
        }

        let log = DebugLog::new(
            id.clone(),
            new_log.level,
            new_log.message,
            new_log.context,
            false,
            None,
            Utc::now(),
        );
        logs.insert(id, log.clone());

        Ok(log)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<DebugLog>, AppError> {
        Ok(self.logs.read().await.get(id).cloned())
    }

    async fn list(&self, filter: DebugLogFilter) -> Result<Vec<DebugLog>, AppError> {
        let logs = self.logs.read().await;

        let mut items: Vec<DebugLog> = logs
            .values()
            .filter(|l| filter.resolved.is_none_or(|r| l.resolved == r))
            .cloned()
            .collect();

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        items.truncate(filter.limit.max(0) as usize);

        Ok(items)
    }

    async fn mark_resolved(&self, id: &str) -> Result<Option<DebugLog>, AppError> {
        let mut logs = self.logs.write().await;

        Ok(logs.get_mut(id).map(|log| {
            log.mark_resolved(Utc::now());
            log.clone()
        }))
    }
}
