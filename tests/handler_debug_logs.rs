mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use media_gateway::domain::repositories::DebugLogRepository;
use media_gateway::infrastructure::persistence::InMemoryDebugLogRepository;
use serde_json::{Value, json};
use std::sync::Arc;

fn server_with_logs(ids: &[&str]) -> (TestServer, Arc<InMemoryDebugLogRepository>) {
    let repository = Arc::new(InMemoryDebugLogRepository::with_logs(
        ids.iter().map(|id| common::open_log(id)),
    ));
    let state = common::create_test_state(
        repository.clone(),
        common::healthy_probes(),
        common::test_storage(),
    );
    (TestServer::new(common::test_app(state)).unwrap(), repository)
}

#[tokio::test]
async fn test_resolve_success() {
    let (server, repository) = server_with_logs(&["abc123"]);

    let response = server
        .post("/api/debug-logs/resolve")
        .json(&json!({ "id": "abc123" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["id"], "abc123");
    assert_eq!(json["resolved"], true);

    let stored = repository.find_by_id("abc123").await.unwrap().unwrap();
    assert!(stored.resolved);
    assert!(stored.resolved_at.is_some());
}

#[tokio::test]
async fn test_resolve_unknown_id_returns_404() {
    let (server, repository) = server_with_logs(&["other"]);

    let response = server
        .post("/api/debug-logs/resolve")
        .json(&json!({ "id": "abc123" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Debug log entry not found");

    let other = repository.find_by_id("other").await.unwrap().unwrap();
    assert!(!other.resolved);
    assert!(repository.find_by_id("abc123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_resolve_is_idempotent() {
    let (server, repository) = server_with_logs(&["abc123"]);

    server
        .post("/api/debug-logs/resolve")
        .json(&json!({ "id": "abc123" }))
        .await
        .assert_status_ok();
    let first = repository.find_by_id("abc123").await.unwrap().unwrap();

    let response = server
        .post("/api/debug-logs/resolve")
        .json(&json!({ "id": "abc123" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["resolved"], true);

    let second = repository.find_by_id("abc123").await.unwrap().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_resolve_missing_id_returns_400() {
    let (server, _) = server_with_logs(&[]);

    let response = server
        .post("/api/debug-logs/resolve")
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_resolve_blank_id_returns_400() {
    let (server, _) = server_with_logs(&[]);

    let response = server
        .post("/api/debug-logs/resolve")
        .json(&json!({ "id": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "validation_error");
}

#[tokio::test]
async fn test_create_then_get() {
    let (server, _) = server_with_logs(&[]);

    let response = server
        .post("/api/debug-logs")
        .json(&json!({
            "level": "warn",
            "message": "thumbnail missing",
            "context": { "key": "thumbs/1.jpg" }
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let created = response.json::<Value>();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["level"], "warn");
    assert_eq!(created["resolved"], false);
    assert_eq!(created["context"]["key"], "thumbs/1.jpg");

    let fetched = server.get(&format!("/api/debug-logs/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["message"], "thumbnail missing");
}

#[tokio::test]
async fn test_create_invalid_level_returns_400() {
    let (server, _) = server_with_logs(&[]);

    let response = server
        .post("/api/debug-logs")
        .json(&json!({ "level": "fatal", "message": "boom" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_empty_message_returns_400() {
    let (server, _) = server_with_logs(&[]);

    let response = server
        .post("/api/debug-logs")
        .json(&json!({ "level": "info", "message": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Validation failed");
}

#[tokio::test]
async fn test_get_unknown_returns_404() {
    let (server, _) = server_with_logs(&[]);

    let response = server.get("/api/debug-logs/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filters_unresolved() {
    let (server, _) = server_with_logs(&["a", "b", "c"]);

    server
        .post("/api/debug-logs/resolve")
        .json(&json!({ "id": "b" }))
        .await
        .assert_status_ok();

    let all = server.get("/api/debug-logs").await.json::<Value>();
    assert_eq!(all["items"].as_array().unwrap().len(), 3);

    let open = server
        .get("/api/debug-logs")
        .add_query_param("resolved", false)
        .await
        .json::<Value>();
    let ids: Vec<&str> = open["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(!ids.contains(&"b"));
}

#[tokio::test]
async fn test_list_limit_out_of_range_returns_400() {
    let (server, _) = server_with_logs(&[]);

    let response = server
        .get("/api/debug-logs")
        .add_query_param("limit", 1000)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (server, _) = server_with_logs(&[]);

    let response = server.get("/api/nothing-here").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Route not found");
}
