mod common;

use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_stats_fields(pool: SqlitePool) {
    common::create_permanent_link(&pool, "abc123", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/api/stats/abc123").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com");
    assert!(json["created_at"].is_string());
    assert!(json["expires_at"].is_null());
    assert_eq!(json["visit_count"], 0);
}

#[sqlx::test]
async fn test_stats_does_not_count_visits(pool: SqlitePool) {
    common::create_permanent_link(&pool, "abc123", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let first = server.get("/api/stats/abc123").await.json::<serde_json::Value>();
    let second = server.get("/api/stats/abc123").await.json::<serde_json::Value>();

    assert_eq!(first, second);
    assert_eq!(second["visit_count"], 0);
}

#[sqlx::test]
async fn test_stats_reflect_redirects(pool: SqlitePool) {
    common::create_permanent_link(&pool, "abc123", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    for _ in 0..3 {
        server.get("/abc123").await;
    }

    let json = server
        .get("/api/stats/abc123")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["visit_count"], 3);
}

#[sqlx::test]
async fn test_stats_expired_link_still_readable(pool: SqlitePool) {
    common::create_expired_link(&pool, "old", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/api/stats/old").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["expires_at"].is_string());
    assert_eq!(json["visit_count"], 0);
}

#[sqlx::test]
async fn test_stats_not_found(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/api/stats/missing").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_shorten_resolve_stats_flow(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com", "expires": "7d" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);

    let response = server.get(&format!("/{code}")).await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");

    let stats = server
        .get(&format!("/api/stats/{code}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stats["original_url"], "https://example.com");
    assert_eq!(stats["visit_count"], 1);
    assert_eq!(stats["expires_at"], created["expires_at"]);
}
