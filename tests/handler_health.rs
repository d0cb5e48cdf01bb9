mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkpro::api::handlers::health_handler;
use linkpro::domain::store::{DurableStore, LINKS_KEY, StoreError};
use linkpro::infrastructure::persistence::MemoryStore;
use std::sync::Arc;

/// Store that can be read but never written.
struct ReadOnlyStore;

impl DurableStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::write(key, "read-only filesystem"))
    }

    fn backend_name(&self) -> &'static str {
        "read-only"
    }
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    common::insert_link(&state, "https://example.com", None);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "Backend: memory");
    assert_eq!(json["checks"]["registry"]["message"], "1 links");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("store").is_some());
    assert!(json["checks"].get("registry").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_store_not_writable() {
    let state = common::create_state_with_store(Arc::new(ReadOnlyStore));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_writes_still_succeed_when_store_not_writable() {
    let state = common::create_state_with_store(Arc::new(ReadOnlyStore));
    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/api/links")
        .json(&serde_json::json!({ "url": "https://example.com", "custom_alias": "kept" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert!(state.links.resolve("kept").is_some());
}

#[tokio::test]
async fn test_health_does_not_rewrite_links() {
    let store = Arc::new(MemoryStore::new());
    let state = common::create_state_with_store(store.clone());
    common::insert_link(&state, "https://example.com", Some("ours"));
    store.write(LINKS_KEY, "[]").unwrap();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    server.get("/health").await.assert_status_ok();

    assert_eq!(store.read(LINKS_KEY).unwrap().as_deref(), Some("[]"));
}
