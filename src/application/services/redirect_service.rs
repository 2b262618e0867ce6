//! Visit handling for the public redirect endpoint.

use std::sync::Arc;

use crate::domain::entities::{Click, Visit};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Resolves a visit to its destination and records the click.
pub struct RedirectService<C: ClickRepository> {
    click_repository: Arc<C>,
}

impl<C: ClickRepository> RedirectService<C> {
    /// Creates a new redirect service.
    pub fn new(click_repository: Arc<C>) -> Self {
        Self { click_repository }
    }

    /// Records a visit and returns the stored click.
    ///
    /// The destination to redirect to is [`Click::redirected_to`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token is unknown or the link is
    /// inactive. Returns [`AppError::Persistence`] if recording failed, in
    /// which case nothing was written.
    pub async fn follow(&self, token: &str, visit: Visit) -> Result<Click, AppError> {
        let click = self
            .click_repository
            .record_visit(token, visit)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        tracing::debug!(
            token,
            device_type = %click.device_type,
            destination = %click.redirected_to,
            "Visit recorded"
        );

        Ok(click)
    }
}
