//! Per-link statistics and click analytics.

use std::sync::Arc;

use crate::domain::analytics::ClickSummary;
use crate::domain::entities::Link;
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// A link together with the summary of its click history.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub link: Link,
    pub summary: ClickSummary,
}

/// Read-side service for stats and analytics. Ignores the active flag.
pub struct AnalyticsService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> AnalyticsService<L, C> {
    /// Creates a new analytics service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Builds device breakdown, recent clicks and daily timeline for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this token.
    pub async fn link_analytics(&self, token: &str) -> Result<LinkAnalytics, AppError> {
        let link = self
            .link_repository
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        let summary = self.click_repository.summarize(link.id).await?;

        Ok(LinkAnalytics { link, summary })
    }
}
