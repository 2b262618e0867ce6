//! JSON API route configuration.

use crate::api::handlers::{analytics_handler, create_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /create`             - Create a smart link
/// - `GET  /stats/{token}`      - Counters and metadata for a link
/// - `GET  /analytics/{token}`  - Device breakdown, recent clicks and daily timeline
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler))
        .route("/stats/{token}", get(stats_handler))
        .route("/analytics/{token}", get(analytics_handler))
}
