mod common;

use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_analytics_timeline_and_breakdown(pool: PgPool) {
    let server = common::create_test_server(pool.clone());
    let link_id = common::create_test_link(&pool, "an1", "https://example.com", None).await;

    common::create_test_click(&pool, link_id, "android", "2024-01-01T08:00:00Z").await;
    common::create_test_click(&pool, link_id, "ios", "2024-01-01T23:59:59Z").await;
    common::create_test_click(&pool, link_id, "android", "2024-01-03T12:00:00Z").await;

    let response = server.get("/api/analytics/an1").await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["success"], true);
    assert_eq!(body["token"], "an1");
    assert_eq!(body["total_clicks"], 3);
    assert_eq!(body["device_breakdown"], json!({ "android": 2, "ios": 1 }));
    assert_eq!(
        body["timeline"],
        json!([
            { "date": "2024-01-01", "clicks": 2 },
            { "date": "2024-01-03", "clicks": 1 }
        ])
    );

    let recent = body["recent_clicks"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["device_type"], "android");
    assert!(
        recent[0]["clicked_at"]
            .as_str()
            .unwrap()
            .starts_with("2024-01-03")
    );
    assert_eq!(recent[0]["ip_address"], "203.0.113.7");
    assert_eq!(recent[0]["redirected_to"], "https://example.com");
    assert!(recent[0]["id"].is_i64());
}

#[sqlx::test]
async fn test_analytics_recent_clicks_capped_at_50(pool: PgPool) {
    let server = common::create_test_server(pool.clone());
    common::create_test_link(&pool, "busy", "https://example.com", None).await;

    for _ in 0..55 {
        let response = server
            .get("/l/busy")
            .add_header("User-Agent", common::WINDOWS_UA)
            .await;
        assert_eq!(response.status_code(), 302);
    }

    let body: Value = server.get("/api/analytics/busy").await.json();

    assert_eq!(body["total_clicks"], 55);
    assert_eq!(body["recent_clicks"].as_array().unwrap().len(), 50);
    assert_eq!(body["device_breakdown"], json!({ "windows": 55 }));

    let timeline = body["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0]["clicks"], 55);

    let ids: Vec<i64> = body["recent_clicks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[sqlx::test]
async fn test_analytics_no_clicks(pool: PgPool) {
    let server = common::create_test_server(pool.clone());
    common::create_test_link(&pool, "quiet", "https://example.com", None).await;

    let body: Value = server.get("/api/analytics/quiet").await.json();

    assert_eq!(body["total_clicks"], 0);
    assert_eq!(body["device_breakdown"], json!({}));
    assert_eq!(body["recent_clicks"], json!([]));
    assert_eq!(body["timeline"], json!([]));
    assert!(body["last_clicked_at"].is_null());
}

#[sqlx::test]
async fn test_analytics_not_found(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    let response = server.get("/api/analytics/missing").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": false, "error": "Link not found" }));
    assert_eq!(common::total_clicks(&pool).await, 0);
}
