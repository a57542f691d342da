mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use media_gateway::config::StorageConfig;
use media_gateway::domain::health::ServiceStatus;
use media_gateway::infrastructure::persistence::InMemoryDebugLogRepository;
use serde_json::Value;
use std::sync::Arc;

fn server_with(probes: Vec<Arc<dyn media_gateway::domain::health::Probe>>) -> TestServer {
    server_with_storage(probes, common::test_storage())
}

fn server_with_storage(
    probes: Vec<Arc<dyn media_gateway::domain::health::Probe>>,
    storage: StorageConfig,
) -> TestServer {
    let state = common::create_test_state(
        Arc::new(InMemoryDebugLogRepository::new()),
        probes,
        storage,
    );
    TestServer::new(common::test_app(state)).unwrap()
}

#[tokio::test]
async fn test_health_all_ok() {
    let server = server_with(common::healthy_probes());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["services"]["credentials"]["status"], "ok");
    assert_eq!(json["services"]["storage"]["status"], "ok");
    assert_eq!(json["services"]["cdn"]["status"], "ok");
}

#[tokio::test]
async fn test_health_response_structure() {
    let server = server_with(common::healthy_probes());

    let json = server.get("/health").await.json::<Value>();

    assert!(json["timestamp"].is_string());
    assert_eq!(json["environment"], "test");
    assert_eq!(json["region"], "us-east-1");
    assert_eq!(json["bucket"], "media-bucket");
    assert_eq!(json["has_credentials"], true);
    assert_eq!(json["services"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_health_storage_timeout_is_error_with_200() {
    let server = server_with(vec![
        common::stub("credentials", ServiceStatus::Ok, "credentials configured"),
        common::stub("storage", ServiceStatus::Error, "timeout"),
        common::stub(
            "cdn",
            ServiceStatus::Degraded,
            "CDN domain not configured, serving directly from storage",
        ),
    ]);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["services"]["storage"]["status"], "error");
    assert_eq!(json["services"]["storage"]["detail"], "timeout");
    assert_eq!(json["services"]["cdn"]["status"], "degraded");
}

#[tokio::test]
async fn test_health_degraded_cdn_only() {
    let server = server_with(vec![
        common::stub("credentials", ServiceStatus::Ok, "credentials configured"),
        common::stub("storage", ServiceStatus::Ok, "bucket 'media-bucket' reachable"),
        common::stub("cdn", ServiceStatus::Degraded, "not configured"),
    ]);

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn test_health_hanging_probe_times_out() {
    let server = server_with(vec![
        common::stub("credentials", ServiceStatus::Ok, "credentials configured"),
        Arc::new(common::HangingProbe("storage")),
    ]);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "error");
    assert_eq!(json["services"]["storage"]["detail"], "timeout after 200ms");
    assert_eq!(json["services"]["credentials"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_missing_credentials_flag() {
    let storage = StorageConfig {
        access_key_id: String::new(),
        secret_access_key: String::new(),
        ..common::test_storage()
    };
    let server = server_with_storage(
        vec![common::stub("credentials", ServiceStatus::Error, "missing credentials")],
        storage,
    );

    let json = server.get("/health").await.json::<Value>();

    assert_eq!(json["status"], "error");
    assert_eq!(json["has_credentials"], false);
}

#[tokio::test]
async fn test_health_internal_crash_returns_500() {
    let server = server_with(vec![
        common::stub("credentials", ServiceStatus::Ok, "credentials configured"),
        Arc::new(common::CrashingProbe),
    ]);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "error");
    assert!(json["error"].is_string());
    assert!(json["timestamp"].is_string());
    assert!(json.get("services").is_none());
}
