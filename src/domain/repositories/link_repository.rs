//! Repository trait for smart link records.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the token is already taken.
    /// Returns [`AppError::Persistence`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by token regardless of its active flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Sets the active flag.
    ///
    /// Returns `Ok(false)` when no link has this token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn set_active(&self, token: &str, is_active: bool) -> Result<bool, AppError>;

    /// Round-trips a trivial query to confirm the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] when the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
