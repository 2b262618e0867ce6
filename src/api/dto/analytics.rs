//! DTOs for the click analytics endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::application::services::LinkAnalytics;
use crate::domain::analytics::DailyClicks;
use crate::domain::entities::Click;
use crate::domain::platform::DeviceType;

/// Analytics for a single link.
///
/// `device_breakdown` keys are lowercase device names; only devices with at
/// least one click appear.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub token: String,
    pub name: String,
    pub total_clicks: i64,
    pub device_breakdown: BTreeMap<DeviceType, i64>,
    pub recent_clicks: Vec<ClickInfo>,
    pub timeline: Vec<TimelineEntry>,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

/// One recorded click.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub id: i64,
    pub device_type: DeviceType,
    pub clicked_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub redirected_to: String,
}

/// Clicks on one UTC calendar day, serialized as `{"date":"YYYY-MM-DD","clicks":n}`.
#[derive(Debug, Serialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub clicks: i64,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            device_type: click.device_type,
            clicked_at: click.clicked_at,
            ip_address: click.ip_address,
            redirected_to: click.redirected_to,
        }
    }
}

impl From<DailyClicks> for TimelineEntry {
    fn from(day: DailyClicks) -> Self {
        Self {
            date: day.date,
            clicks: day.clicks,
        }
    }
}

impl From<LinkAnalytics> for AnalyticsResponse {
    fn from(analytics: LinkAnalytics) -> Self {
        let LinkAnalytics { link, summary } = analytics;

        Self {
            success: true,
            token: link.token,
            name: link.name,
            total_clicks: summary.total_clicks,
            device_breakdown: summary.device_breakdown,
            recent_clicks: summary.recent_clicks.into_iter().map(Into::into).collect(),
            timeline: summary.timeline.into_iter().map(Into::into).collect(),
            created_at: link.created_at,
            last_clicked_at: link.last_clicked_at,
        }
    }
}
