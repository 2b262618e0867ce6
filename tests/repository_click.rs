mod common;

use smartlink::AppError;
use smartlink::domain::analytics::RECENT_CLICKS_LIMIT;
use smartlink::domain::entities::Visit;
use smartlink::domain::platform::DeviceType;
use smartlink::domain::repositories::ClickRepository;
use smartlink::infrastructure::persistence::PgClickRepository;
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinSet;

#[sqlx::test]
async fn test_record_visit(pool: PgPool) {
    let link_id = common::create_test_link(
        &pool,
        "rec1",
        "https://example.com",
        Some("https://play.google.com/x"),
    )
    .await;
    let repo = PgClickRepository::new(Arc::new(pool.clone()));

    let click = repo
        .record_visit(
            "rec1",
            Visit::new(Some(common::ANDROID_UA), Some("203.0.113.7".to_string())),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(click.link_id, link_id);
    assert_eq!(click.device_type, DeviceType::Android);
    assert_eq!(click.redirected_to, "https://play.google.com/x");
    assert_eq!(click.ip_address.as_deref(), Some("203.0.113.7"));
    assert_eq!(click.country, None);

    assert_eq!(common::click_count(&pool, "rec1").await, 1);
}

#[sqlx::test]
async fn test_record_visit_unknown_token(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));

    let result = repo.record_visit("nope", Visit::default()).await.unwrap();

    assert!(result.is_none());
    assert_eq!(common::total_clicks(&pool).await, 0);
}

#[sqlx::test]
async fn test_record_visit_inactive_link(pool: PgPool) {
    let link_id = common::create_inactive_link(&pool, "off", "https://example.com").await;
    let repo = PgClickRepository::new(Arc::new(pool.clone()));

    let result = repo.record_visit("off", Visit::default()).await.unwrap();

    assert!(result.is_none());
    assert_eq!(common::stored_clicks(&pool, link_id).await, 0);
    assert_eq!(common::click_count(&pool, "off").await, 0);
}

#[sqlx::test]
async fn test_concurrent_visits_keep_counter_consistent(pool: PgPool) {
    const VISITS: usize = 25;

    let link_id = common::create_test_link(&pool, "race", "https://example.com", None).await;
    let repo = Arc::new(PgClickRepository::new(Arc::new(pool.clone())));

    let mut tasks = JoinSet::new();
    for i in 0..VISITS {
        let repo = repo.clone();
        tasks.spawn(async move {
            let user_agent = if i % 2 == 0 {
                common::IPHONE_UA
            } else {
                common::WINDOWS_UA
            };
            repo.record_visit("race", Visit::new(Some(user_agent), None))
                .await
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap().unwrap().is_some());
    }

    assert_eq!(common::click_count(&pool, "race").await, VISITS as i64);
    assert_eq!(common::stored_clicks(&pool, link_id).await, VISITS as i64);
}

#[sqlx::test]
async fn test_record_visit_rejects_unsafe_destination(pool: PgPool) {
    let link_id =
        common::create_test_link(&pool, "badloc", "https://example.com/a b", None).await;
    let repo = PgClickRepository::new(Arc::new(pool.clone()));

    let result = repo.record_visit("badloc", Visit::default()).await;

    assert!(matches!(result, Err(AppError::Internal(_))));
    assert_eq!(common::stored_clicks(&pool, link_id).await, 0);
    assert_eq!(common::click_count(&pool, "badloc").await, 0);
}

#[sqlx::test]
async fn test_summarize_aggregates_in_store(pool: PgPool) {
    let link_id = common::create_test_link(&pool, "hist", "https://example.com", None).await;
    common::create_test_click(&pool, link_id, "linux", "2024-01-02T00:00:00Z").await;
    common::create_test_click(&pool, link_id, "macos", "2024-01-05T00:00:00Z").await;
    common::create_test_click(&pool, link_id, "linux", "2024-01-02T23:59:59Z").await;
    common::create_test_click(&pool, link_id, "other", "2024-01-01T00:00:00Z").await;

    let other_link = common::create_test_link(&pool, "else", "https://example.com", None).await;
    common::create_test_click(&pool, other_link, "ios", "2024-01-03T00:00:00Z").await;

    let repo = PgClickRepository::new(Arc::new(pool));

    let summary = repo.summarize(link_id).await.unwrap();

    assert_eq!(summary.total_clicks, 4);
    assert_eq!(
        summary.device_breakdown,
        BTreeMap::from([
            (DeviceType::Linux, 2),
            (DeviceType::Macos, 1),
            (DeviceType::Other, 1),
        ])
    );

    let timeline: Vec<(String, i64)> = summary
        .timeline
        .iter()
        .map(|day| (day.date.to_string(), day.clicks))
        .collect();
    assert_eq!(
        timeline,
        vec![
            ("2024-01-01".to_string(), 1),
            ("2024-01-02".to_string(), 2),
            ("2024-01-05".to_string(), 1),
        ]
    );

    let devices: Vec<DeviceType> = summary
        .recent_clicks
        .iter()
        .map(|c| c.device_type)
        .collect();
    assert_eq!(
        devices,
        vec![
            DeviceType::Macos,
            DeviceType::Linux,
            DeviceType::Linux,
            DeviceType::Other
        ]
    );
}

#[sqlx::test]
async fn test_summarize_limits_recent_clicks(pool: PgPool) {
    let link_id = common::create_test_link(&pool, "lots", "https://example.com", None).await;
    for minute in 0..(RECENT_CLICKS_LIMIT + 5) {
        let clicked_at = format!("2024-03-01T10:{minute:02}:00Z");
        common::create_test_click(&pool, link_id, "android", &clicked_at).await;
    }
    let repo = PgClickRepository::new(Arc::new(pool));

    let summary = repo.summarize(link_id).await.unwrap();

    assert_eq!(summary.total_clicks, (RECENT_CLICKS_LIMIT + 5) as i64);
    assert_eq!(summary.recent_clicks.len(), RECENT_CLICKS_LIMIT);
    assert_eq!(
        summary.recent_clicks[0].clicked_at.to_rfc3339(),
        "2024-03-01T10:54:00+00:00"
    );
    assert_eq!(summary.timeline.len(), 1);
    assert_eq!(summary.timeline[0].clicks, (RECENT_CLICKS_LIMIT + 5) as i64);
}

#[sqlx::test]
async fn test_summarize_without_clicks(pool: PgPool) {
    let link_id = common::create_test_link(&pool, "none", "https://example.com", None).await;
    let repo = PgClickRepository::new(Arc::new(pool));

    let summary = repo.summarize(link_id).await.unwrap();

    assert_eq!(summary.total_clicks, 0);
    assert!(summary.device_breakdown.is_empty());
    assert!(summary.recent_clicks.is_empty());
    assert!(summary.timeline.is_empty());
}
