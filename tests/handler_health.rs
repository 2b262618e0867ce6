mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use smartlink::api::handlers::{health_handler, readiness_handler};
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[sqlx::test]
async fn test_health_does_not_need_database(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    pool.close().await;

    server.get("/health").await.assert_status_ok();

    let ready = server.get("/health/ready").await;
    assert_eq!(ready.status_code(), 503);
    let json = ready.json::<Value>();
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["database"], "Database error");
}

#[sqlx::test]
async fn test_readiness_endpoint(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/health/ready").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["database"], "ok");
}

#[sqlx::test]
async fn test_root_descriptor(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["service"], "smartlink");
    assert_eq!(json["status"], "online");
    assert!(json.get("version").is_some());
    assert_eq!(json["endpoints"]["create_link"], "POST /api/create");
    assert_eq!(json["endpoints"]["redirect"], "GET /l/{token}");
}
