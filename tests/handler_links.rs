mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_link_generates_alias() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body = response.json::<Value>();
    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert_eq!(body["short_url"], format!("http://s.test/{alias}"));
    assert_eq!(body["original_url"], "https://example.com/a");
    assert_eq!(body["clicks"], 0);
    assert_eq!(body["seo_score"], 80);
    assert!(body.get("custom_alias").is_none());
    assert!(body.get("last_clicked").is_none());
}

#[tokio::test]
async fn test_create_link_with_custom_alias() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "custom_alias": "summer-sale" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body = response.json::<Value>();
    assert_eq!(body["alias"], "summer-sale");
    assert_eq!(body["custom_alias"], "summer-sale");
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(state.links.is_empty());
}

#[tokio::test]
async fn test_create_link_invalid_alias() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "custom_alias": "no/slashes" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["details"]["field"], "custom_alias");
}

#[tokio::test]
async fn test_create_link_reserved_alias() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "custom_alias": "health" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_link_alias_conflict() {
    let state = common::create_test_state();
    common::insert_link(&state, "https://example.com/1", Some("taken"));
    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/2", "custom_alias": "taken" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["details"]["alias"], "taken");
    assert_eq!(state.links.len(), 1);
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let state = common::create_test_state();
    common::insert_link(&state, "https://example.com/1", Some("first"));
    common::insert_link(&state, "https://example.com/2", Some("second"));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"][0]["alias"], "second");
    assert_eq!(body["items"][1]["alias"], "first");
}

#[tokio::test]
async fn test_resolve_does_not_count_click() {
    let state = common::create_test_state();
    common::insert_link(&state, "https://example.com", Some("promo"));
    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server.get("/api/links/resolve/promo").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["original_url"], "https://example.com");
    assert_eq!(state.links.get("promo").unwrap().clicks, 0);
}

#[tokio::test]
async fn test_resolve_unknown_alias() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/links/resolve/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_record_click_counts_every_call() {
    let state = common::create_test_state();
    let id = common::insert_link(&state, "https://example.com", Some("promo"));
    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let first = server.post(&format!("/api/links/{id}/clicks")).await;
    let second = server.post(&format!("/api/links/{id}/clicks")).await;

    assert_eq!(first.status_code(), 204);
    assert_eq!(second.status_code(), 204);
    let record = state.links.get("promo").unwrap();
    assert_eq!(record.clicks, 2);
    assert!(record.last_clicked.is_some());
}

#[tokio::test]
async fn test_record_click_unknown_id() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.post("/api/links/nope/clicks").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link() {
    let state = common::create_test_state();
    let id = common::insert_link(&state, "https://example.com", Some("promo"));
    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server.delete(&format!("/api/links/{id}")).await;
    assert_eq!(response.status_code(), 204);
    assert!(state.links.resolve("promo").is_none());

    let again = server.delete(&format!("/api/links/{id}")).await;
    assert_eq!(again.status_code(), 204);
}

#[tokio::test]
async fn test_summary() {
    let state = common::create_test_state();
    let popular = common::insert_link(&state, "https://example.com/1", Some("popular"));
    common::insert_link(&state, "https://example.com/2", Some("quiet"));
    state.links.record_click(&popular).unwrap();
    state.links.record_click(&popular).unwrap();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/summary").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total_links"], 2);
    assert_eq!(body["total_clicks"], 2);
    assert_eq!(body["average_seo_score"], 80);
    assert_eq!(body["top_link"]["alias"], "popular");
}

#[tokio::test]
async fn test_summary_empty() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let body = server.get("/api/summary").await.json::<Value>();

    assert_eq!(body["total_links"], 0);
    assert_eq!(body["average_seo_score"], 0);
    assert!(body["top_link"].is_null());
}

#[tokio::test]
async fn test_tab_preference_round_trip() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let initial = server.get("/api/preferences/tab").await.json::<Value>();
    assert_eq!(initial["tab"], "dashboard");

    let response = server
        .put("/api/preferences/tab")
        .json(&json!({ "tab": "analytics" }))
        .await;
    response.assert_status_ok();

    let current = server.get("/api/preferences/tab").await.json::<Value>();
    assert_eq!(current["tab"], "analytics");
}

#[tokio::test]
async fn test_unknown_tab_rejected() {
    let state = common::create_test_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .put("/api/preferences/tab")
        .json(&json!({ "tab": "settings" }))
        .await;

    assert_eq!(response.status_code(), 400);
}
