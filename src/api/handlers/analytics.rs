//! Handler for click analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click breakdown, recent clicks and daily timeline of a link.
///
/// # Endpoint
///
/// `GET /api/analytics/{token}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "token": "q2sd8Jk1LmPz0aXw",
///   "name": "Spring campaign",
///   "total_clicks": 3,
///   "device_breakdown": { "android": 2, "ios": 1 },
///   "recent_clicks": [
///     {
///       "id": 3,
///       "device_type": "ios",
///       "clicked_at": "2024-01-03T09:12:00Z",
///       "ip_address": "203.0.113.7",
///       "redirected_to": "https://apps.apple.com/app/id123"
///     }
///   ],
///   "timeline": [
///     { "date": "2024-01-01", "clicks": 2 },
///     { "date": "2024-01-03", "clicks": 1 }
///   ],
///   "created_at": "2024-01-01T08:00:00Z",
///   "last_clicked_at": "2024-01-03T09:12:00Z"
/// }
/// ```
///
/// `recent_clicks` holds at most 50 entries, newest first. `timeline` lists
/// only days with clicks, oldest first.
///
/// # Errors
///
/// Returns 404 Not Found if the token is unknown.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.link_analytics(&token).await?;

    Ok(Json(analytics.into()))
}
