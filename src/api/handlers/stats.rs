//! Handler for aggregate link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns counters and metadata for a link.
///
/// # Endpoint
///
/// `GET /api/stats/{token}`
///
/// Inactive links are reported like active ones.
///
/// # Errors
///
/// Returns 404 Not Found if the token is unknown.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_link(&token).await?;

    Ok(Json(link.into()))
}
