//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Service descriptor
//! - `GET  /health`        - Liveness probe
//! - `GET  /health/ready`  - Readiness probe (store round-trip)
//! - `GET  /l/{token}`     - Smart redirect
//! - `/api/*`              - JSON API (create, stats, analytics)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, readiness_handler, redirect_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with every route and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/l/{token}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`router`] so that `/l/abc/` and `/l/abc` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
