#![allow(dead_code)]

use axum_test::TestServer;
use smartlink::routes::router;
use smartlink::state::AppState;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1";
pub const WINDOWS_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
     (KHTML, like Gecko) Version/17.2 Safari/605.1.15";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), None)
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Opens a second pool on the same database and closes it, so requests
/// served through it fail while `pool` can still inspect the tables.
pub async fn closed_pool(pool: &PgPool) -> PgPool {
    let closed = PgPoolOptions::new()
        .max_connections(1)
        .connect_with((*pool.connect_options()).clone())
        .await
        .unwrap();
    closed.close().await;
    closed
}

pub async fn link_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM smart_links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts an active link with only a fallback and an optional Android URL.
pub async fn create_test_link(
    pool: &PgPool,
    token: &str,
    fallback_url: &str,
    android_url: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO smart_links (token, name, android_url, fallback_url) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(token)
    .bind(format!("Link {token}"))
    .bind(android_url)
    .bind(fallback_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_inactive_link(pool: &PgPool, token: &str, fallback_url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO smart_links (token, fallback_url, is_active) \
         VALUES ($1, $2, FALSE) RETURNING id",
    )
    .bind(token)
    .bind(fallback_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a click at a fixed time, e.g. `"2024-01-01T10:00:00Z"`.
pub async fn create_test_click(pool: &PgPool, link_id: i64, device_type: &str, clicked_at: &str) {
    sqlx::query(
        "INSERT INTO link_clicks (link_id, device_type, clicked_at, ip_address, redirected_to) \
         VALUES ($1, $2, $3::timestamptz, '203.0.113.7', 'https://example.com')",
    )
    .bind(link_id)
    .bind(device_type)
    .bind(clicked_at)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("UPDATE smart_links SET click_count = click_count + 1 WHERE id = $1")
        .bind(link_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn click_count(pool: &PgPool, token: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM smart_links WHERE token = $1")
        .bind(token)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn stored_clicks(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks WHERE link_id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn total_clicks(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks")
        .fetch_one(pool)
        .await
        .unwrap()
}
