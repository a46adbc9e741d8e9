#![allow(dead_code)]

use axum::{Router, routing::get};
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tinylink::api;
use tinylink::api::handlers::{health_handler, redirect_handler};
use tinylink::config::Config;
use tinylink::infrastructure::persistence::SqliteLinkRepository;
use tinylink::state::AppState;

pub const TEST_DOMAIN: &str = "sho.rt";

pub fn test_config() -> Config {
    Config {
        site_domain: TEST_DOMAIN.to_string(),
        ..Config::default()
    }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    AppState::new(link_repository, &test_config())
}

/// Same route layout as the server, without static files and path normalization.
pub fn create_test_app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/{short_code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(create_test_state(pool))
}

pub async fn create_test_link(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    expires_at: Option<DateTime<Utc>>,
) {
    sqlx::query(
        "INSERT INTO links (short_code, original_url, created_at, expires_at) VALUES (?, ?, ?, ?)",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now())
    .bind(expires_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_expired_link(pool: &SqlitePool, code: &str, url: &str) {
    create_test_link(pool, code, url, Some(Utc::now() - Duration::hours(1))).await;
}

pub async fn create_permanent_link(pool: &SqlitePool, code: &str, url: &str) {
    create_test_link(pool, code, url, None).await;
}

pub async fn visit_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT visit_count FROM links WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
