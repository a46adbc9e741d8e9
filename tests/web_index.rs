mod common;

use axum_test::TestServer;
use sqlx::SqlitePool;
use tinylink::web;

#[sqlx::test]
async fn test_index_renders_site_settings(pool: SqlitePool) {
    let app = web::routes::public_routes().with_state(common::create_test_state(pool));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(common::TEST_DOMAIN));
    assert!(html.contains("Default (30d)"));
    assert!(html.contains("/static/app.js"));
}
