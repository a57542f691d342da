//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DebugLogService, HealthAggregator, MediaUrlService};
use crate::config::StorageConfig;
use crate::domain::repositories::DebugLogRepository;

/// Deployment facts echoed in the health response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentInfo {
    pub environment: String,
    pub region: String,
    pub bucket: String,
    pub has_credentials: bool,
}

impl DeploymentInfo {
    pub fn new(environment: impl Into<String>, storage: &StorageConfig) -> Self {
        Self {
            environment: environment.into(),
            region: storage.region.clone(),
            bucket: storage.bucket.clone(),
            has_credentials: storage.has_credentials(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub debug_log_service: Arc<DebugLogService<dyn DebugLogRepository>>,
    pub media_url_service: Arc<MediaUrlService>,
    pub health_aggregator: Arc<HealthAggregator>,
    pub deployment: Arc<DeploymentInfo>,
}

impl AppState {
    /// Wires services over an already-built repository and probe set.
    pub fn new(
        repository: Arc<dyn DebugLogRepository>,
        health_aggregator: HealthAggregator,
        storage: StorageConfig,
        environment: impl Into<String>,
    ) -> Self {
        let deployment = DeploymentInfo::new(environment, &storage);

        Self {
            debug_log_service: Arc::new(DebugLogService::new(repository)),
            media_url_service: Arc::new(MediaUrlService::new(storage)),
            health_aggregator: Arc::new(health_aggregator),
            deployment: Arc::new(deployment),
        }
    }
}
