//! Per-link click analytics.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::entities::Click;
use crate::domain::platform::DeviceType;

/// Number of individual click records included in a summary.
pub const RECENT_CLICKS_LIMIT: usize = 50;

/// Click count for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub clicks: i64,
}

/// Aggregated view over a link's click history.
#[derive(Debug, Clone)]
pub struct ClickSummary {
    pub total_clicks: i64,
    /// Only device types with at least one click appear.
    pub device_breakdown: BTreeMap<DeviceType, i64>,
    /// Newest first (ties broken by id), at most [`RECENT_CLICKS_LIMIT`] entries.
    pub recent_clicks: Vec<Click>,
    /// Ascending by date; days without clicks are omitted.
    pub timeline: Vec<DailyClicks>,
}
