//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService, RedirectService};
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};

/// Handles to the services, cloned per request.
///
/// Holds no mutable state of its own; the store is the only shared state.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub redirect_service: Arc<RedirectService<PgClickRepository>>,
    pub analytics_service: Arc<AnalyticsService<PgLinkRepository, PgClickRepository>>,
    /// Overrides the Host-derived base of generated redirect URLs.
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Wires PostgreSQL repositories into the services.
    pub fn new(pool: Arc<PgPool>, public_base_url: Option<String>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let click_repository = Arc::new(PgClickRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(click_repository.clone())),
            analytics_service: Arc::new(AnalyticsService::new(
                link_repository,
                click_repository,
            )),
            public_base_url,
        }
    }
}
