//! PostgreSQL implementation of click repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::pg_link_repository::{LINK_COLUMNS, LinkRow};
use crate::domain::analytics::{ClickSummary, DailyClicks, RECENT_CLICKS_LIMIT};
use crate::domain::entities::{Click, Link, Visit};
use crate::domain::platform::DeviceType;
use crate::domain::repositories::ClickRepository;
use crate::domain::resolver;
use crate::error::AppError;
use crate::utils::destination::is_location_safe;

const CLICK_COLUMNS: &str =
    "id, link_id, clicked_at, device_type, user_agent, ip_address, country, redirected_to";

/// Raw `link_clicks` row.
#[derive(Debug, sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    clicked_at: DateTime<Utc>,
    device_type: String,
    user_agent: Option<String>,
    ip_address: Option<String>,
    country: Option<String>,
    redirected_to: String,
}

impl TryFrom<ClickRow> for Click {
    type Error = AppError;

    fn try_from(row: ClickRow) -> Result<Self, Self::Error> {
        let device_type = row
            .device_type
            .parse::<DeviceType>()
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(Click {
            id: row.id,
            link_id: row.link_id,
            clicked_at: row.clicked_at,
            device_type,
            user_agent: row.user_agent,
            ip_address: row.ip_address,
            country: row.country,
            redirected_to: row.redirected_to,
        })
    }
}

/// PostgreSQL repository for click accounting.
///
/// A visit is recorded in a single transaction holding a row lock on the
/// link, so concurrent visits to the same token serialize on the counter
/// and the counter always equals the number of stored clicks.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record_visit(&self, token: &str, visit: Visit) -> Result<Option<Click>, AppError> {
        let mut tx = self.pool.begin().await?;

        let lock_sql = format!(
            "SELECT {LINK_COLUMNS} FROM smart_links WHERE token = $1 AND is_active FOR UPDATE"
        );

        let Some(row) = sqlx::query_as::<_, LinkRow>(&lock_sql)
            .bind(token)
            .fetch_optional(&mut *tx)
            .await?
        else {
            // Dropping the transaction rolls it back.
            return Ok(None);
        };

        let link = Link::from(row);
        let resolution = resolver::resolve(&link, visit.user_agent.as_deref());

        if !is_location_safe(&resolution.destination) {
            return Err(AppError::internal(format!(
                "Stored destination for link {} is not a valid redirect target",
                link.id
            )));
        }

        sqlx::query(
            r#"
            UPDATE smart_links
            SET click_count = click_count + 1, last_clicked_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(link.id)
        .execute(&mut *tx)
        .await?;

        let insert_sql = format!(
            r#"
            INSERT INTO link_clicks (link_id, device_type, user_agent, ip_address, redirected_to)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CLICK_COLUMNS}
            "#
        );

        let click_row = sqlx::query_as::<_, ClickRow>(&insert_sql)
            .bind(link.id)
            .bind(resolution.device_type.as_str())
            .bind(visit.user_agent)
            .bind(visit.ip_address)
            .bind(resolution.destination)
            .fetch_one(&mut *tx)
            .await?;

        let click = Click::try_from(click_row)?;

        tx.commit().await?;

        Ok(Some(click))
    }

    async fn summarize(&self, link_id: i64) -> Result<ClickSummary, AppError> {
        // One snapshot for all aggregates, so the totals agree with each other.
        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total_clicks: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks WHERE link_id = $1")
                .bind(link_id)
                .fetch_one(&mut *tx)
                .await?;

        let device_rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT device_type, COUNT(*)
            FROM link_clicks
            WHERE link_id = $1
            GROUP BY device_type
            "#,
        )
        .bind(link_id)
        .fetch_all(&mut *tx)
        .await?;

        let timeline_rows = sqlx::query_as::<_, (NaiveDate, i64)>(
            r#"
            SELECT (clicked_at AT TIME ZONE 'UTC')::date AS date, COUNT(*)
            FROM link_clicks
            WHERE link_id = $1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(link_id)
        .fetch_all(&mut *tx)
        .await?;

        let recent_sql = format!(
            "SELECT {CLICK_COLUMNS} FROM link_clicks WHERE link_id = $1 \
             ORDER BY clicked_at DESC, id DESC LIMIT $2"
        );

        let recent_rows = sqlx::query_as::<_, ClickRow>(&recent_sql)
            .bind(link_id)
            .bind(RECENT_CLICKS_LIMIT as i64)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let mut device_breakdown = BTreeMap::new();
        for (device_type, clicks) in device_rows {
            let device_type = device_type
                .parse::<DeviceType>()
                .map_err(|e| AppError::internal(e.to_string()))?;
            device_breakdown.insert(device_type, clicks);
        }

        Ok(ClickSummary {
            total_clicks,
            device_breakdown,
            recent_clicks: recent_rows
                .into_iter()
                .map(Click::try_from)
                .collect::<Result<_, _>>()?,
            timeline: timeline_rows
                .into_iter()
                .map(|(date, clicks)| DailyClicks { date, clicks })
                .collect(),
        })
    }
}
