//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, PlatformUrls};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_token;

/// Column list shared by every `smart_links` read.
pub(crate) const LINK_COLUMNS: &str = "id, token, name, android_url, ios_url, windows_url, \
     macos_url, linux_url, fallback_url, click_count, created_at, last_clicked_at, is_active";

/// Raw `smart_links` row.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct LinkRow {
    pub id: i64,
    pub token: String,
    pub name: String,
    pub android_url: Option<String>,
    pub ios_url: Option<String>,
    pub windows_url: Option<String>,
    pub macos_url: Option<String>,
    pub linux_url: Option<String>,
    pub fallback_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            token: row.token,
            name: row.name,
            destinations: PlatformUrls {
                android: row.android_url,
                ios: row.ios_url,
                windows: row.windows_url,
                macos: row.macos_url,
                linux: row.linux_url,
            },
            fallback_url: row.fallback_url,
            click_count: row.click_count,
            created_at: row.created_at,
            last_clicked_at: row.last_clicked_at,
            is_active: row.is_active,
        }
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// All values are bound as parameters; nothing user-supplied is interpolated
/// into SQL text.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            r#"
            INSERT INTO smart_links
                (token, name, android_url, ios_url, windows_url, macos_url, linux_url, fallback_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {LINK_COLUMNS}
            "#
        );

        let NewLink {
            token,
            name,
            destinations,
            fallback_url,
        } = new_link;

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(token)
            .bind(name)
            .bind(destinations.android)
            .bind(destinations.ios)
            .bind(destinations.windows)
            .bind(destinations.macos)
            .bind(destinations.linux)
            .bind(fallback_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_token(&e) {
                    AppError::conflict("Token already exists")
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(row.into())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM smart_links WHERE token = $1");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(token)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM smart_links ORDER BY created_at DESC, id DESC");

        let rows = sqlx::query_as::<_, LinkRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn set_active(&self, token: &str, is_active: bool) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE smart_links SET is_active = $2 WHERE token = $1")
            .bind(token)
            .bind(is_active)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
