mod common;

use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        json["short_url"],
        format!("https://{}/{}", common::TEST_DOMAIN, code)
    );
    assert!(json["expires_at"].is_string());
}

#[sqlx::test]
async fn test_shorten_default_ttl_is_thirty_days(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    let json = response.json::<serde_json::Value>();
    let expires_at: DateTime<Utc> = json["expires_at"].as_str().unwrap().parse().unwrap();
    let expected = Utc::now() + Duration::days(30);

    assert!((expected - expires_at).num_seconds().abs() < 60);
}

#[sqlx::test]
async fn test_shorten_with_custom_code(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom": "promo" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "promo");
    assert_eq!(json["short_url"], "https://sho.rt/promo");
}

#[sqlx::test]
async fn test_shorten_never_expires(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "expires": "never" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["expires_at"].is_null());
}

#[sqlx::test]
async fn test_shorten_custom_code_conflict(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.com", "custom": "promo" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://b.com", "custom": "promo" }))
        .await;

    assert_eq!(response.status_code(), 409);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_shorten_conflict_keeps_first_mapping(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://a.com", "custom": "promo" }))
        .await;
    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://b.com", "custom": "promo" }))
        .await;

    let response = server.get("/api/stats/promo").await;
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://a.com");
}

#[sqlx::test]
async fn test_shorten_missing_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_blank_url(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "   " }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_shorten_invalid_expires(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    for expires in ["7", "abc", "0d", "-1d"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": "https://example.com", "expires": expires }))
            .await;

        response.assert_status_bad_request();
    }
}

#[sqlx::test]
async fn test_shorten_invalid_custom_code(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    for custom in ["has space", "slash/", "api", "health"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": "https://example.com", "custom": custom }))
            .await;

        response.assert_status_bad_request();
    }
}

#[sqlx::test]
async fn test_shorten_empty_custom_generates_code(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom": "" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"].as_str().unwrap().len(), 6);
}

#[sqlx::test]
async fn test_shorten_wrong_url_type(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.post("/api/shorten").json(&json!({ "url": 123 })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[sqlx::test]
async fn test_shorten_wrong_expires_type(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "expires": 7 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_malformed_json_body(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid request body");
}

#[sqlx::test]
async fn test_shorten_custom_code_used_verbatim(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "custom": " promo " }))
        .await;

    response.assert_status_bad_request();
    server.get("/api/stats/promo").await.assert_status_not_found();
}
