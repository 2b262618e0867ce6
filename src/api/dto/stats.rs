//! DTOs for aggregate link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Counters and metadata for a single link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub token: String,
    pub name: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            success: true,
            token: link.token,
            name: link.name,
            click_count: link.click_count,
            created_at: link.created_at,
            last_clicked_at: link.last_clicked_at,
            is_active: link.is_active,
        }
    }
}
