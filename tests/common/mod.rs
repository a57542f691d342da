#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use chrono::Utc;
use media_gateway::api::handlers::{health_handler, not_found_handler};
use media_gateway::api::routes::api_routes;
use media_gateway::application::services::HealthAggregator;
use media_gateway::config::StorageConfig;
use media_gateway::domain::entities::DebugLog;
use media_gateway::domain::health::{Probe, ServiceCheckResult, ServiceStatus};
use media_gateway::infrastructure::persistence::InMemoryDebugLogRepository;
use media_gateway::state::AppState;
use std::sync::Arc;
use std::time::Duration;

/// Probe returning a fixed result.
pub struct StubProbe {
    pub name: &'static str,
    pub status: ServiceStatus,
    pub detail: &'static str,
}

#[async_trait]
impl Probe for StubProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn check(&self) -> ServiceCheckResult {
        ServiceCheckResult::new(self.name, self.status, Some(self.detail.to_string()))
    }
}

/// Probe that never finishes on its own.
pub struct HangingProbe(pub &'static str);

#[async_trait]
impl Probe for HangingProbe {
    fn name(&self) -> &'static str {
        self.0
    }

    async fn check(&self) -> ServiceCheckResult {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        ServiceCheckResult::ok(self.0, "too late")
    }
}

/// Probe that panics while being identified, before its check is guarded.
pub struct CrashingProbe;

#[async_trait]
impl Probe for CrashingProbe {
    fn name(&self) -> &'static str {
        panic!("probe registry corrupted")
    }

    async fn check(&self) -> ServiceCheckResult {
        ServiceCheckResult::ok("unreachable", "never runs")
    }
}

pub fn stub(name: &'static str, status: ServiceStatus, detail: &'static str) -> Arc<dyn Probe> {
    Arc::new(StubProbe {
        name,
        status,
        detail,
    })
}

pub fn test_storage() -> StorageConfig {
    StorageConfig {
        bucket: "media-bucket".to_string(),
        region: "us-east-1".to_string(),
        endpoint: None,
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        session_token: None,
        cdn_domain: Some("d111111abcdef8.cloudfront.net".to_string()),
    }
}

pub fn healthy_probes() -> Vec<Arc<dyn Probe>> {
    vec![
        stub("credentials", ServiceStatus::Ok, "credentials configured"),
        stub("storage", ServiceStatus::Ok, "bucket 'media-bucket' reachable"),
        stub("cdn", ServiceStatus::Ok, "configured: d111111abcdef8.cloudfront.net"),
    ]
}

pub fn open_log(id: &str) -> DebugLog {
    DebugLog::new(
        id.to_string(),
        "error".to_string(),
        "upload failed".to_string(),
        None,
        false,
        None,
        Utc::now(),
    )
}

pub fn create_test_state(
    repository: Arc<InMemoryDebugLogRepository>,
    probes: Vec<Arc<dyn Probe>>,
    storage: StorageConfig,
) -> AppState {
    AppState::new(
        repository,
        HealthAggregator::new(probes, Duration::from_millis(200)),
        storage,
        "test",
    )
}

/// Application routes without rate limiting, which needs a peer address.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .fallback(not_found_handler)
        .with_state(state)
}

pub fn default_app() -> (Router, Arc<InMemoryDebugLogRepository>) {
    let repository = Arc::new(InMemoryDebugLogRepository::new());
    let state = create_test_state(repository.clone(), healthy_probes(), test_storage());
    (test_app(state), repository)
}
