mod common;

use axum_test::TestServer;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    common::create_permanent_link(&pool, "redirect1", "https://example.com/target").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["redirect"], "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_counts_visits(pool: SqlitePool) {
    common::create_permanent_link(&pool, "clickme", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    server.get("/clickme").await;
    server.get("/clickme").await;

    assert_eq!(common::visit_count(&pool, "clickme").await, 2);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_expired(pool: SqlitePool) {
    common::create_expired_link(&pool, "old", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool.clone())).unwrap();

    let response = server.get("/old").await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "expired");
    assert_eq!(common::visit_count(&pool, "old").await, 0);
}

#[sqlx::test]
async fn test_redirect_is_case_sensitive(pool: SqlitePool) {
    common::create_permanent_link(&pool, "Promo", "https://example.com").await;
    let server = TestServer::new(common::create_test_app(pool)).unwrap();

    assert_eq!(server.get("/Promo").await.status_code(), 302);
    server.get("/promo").await.assert_status_not_found();
}
