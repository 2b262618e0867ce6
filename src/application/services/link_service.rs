//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, PlatformUrls};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::token_generator::generate_token;

/// Name given to links created without one.
pub const DEFAULT_LINK_NAME: &str = "Unnamed Link";

/// Token generation attempts before creation gives up.
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// Service for creating, reading and toggling smart links.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a link under a freshly generated token.
    ///
    /// A missing or blank `name` becomes [`DEFAULT_LINK_NAME`]. The caller is
    /// responsible for validating URLs.
    ///
    /// # Token collisions
    ///
    /// The repository reports a taken token as [`AppError::Conflict`]; a new
    /// token is drawn up to three times before failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every attempt collided or the random
    /// source failed. Returns [`AppError::Persistence`] on database errors.
    pub async fn create_link(
        &self,
        name: Option<String>,
        destinations: PlatformUrls,
        fallback_url: String,
    ) -> Result<Link, AppError> {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_LINK_NAME.to_string());

        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let new_link = NewLink {
                token: generate_token()?,
                name: name.clone(),
                destinations: destinations.clone(),
                fallback_url: fallback_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict(_)) => {
                    tracing::warn!(attempt, "Token collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal("Failed to generate unique token"))
    }

    /// Retrieves a link by token, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this token.
    pub async fn get_link(&self, token: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    /// Lists every link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Enables or disables redirects for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this token.
    pub async fn set_active(&self, token: &str, is_active: bool) -> Result<(), AppError> {
        if self.link_repository.set_active(token, is_active).await? {
            tracing::info!(token, is_active, "Link active flag updated");
            Ok(())
        } else {
            Err(AppError::not_found("Link not found"))
        }
    }

    /// Confirms the link store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
