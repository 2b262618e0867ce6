//! Repository trait for click accounting and click analytics.

use crate::domain::analytics::ClickSummary;
use crate::domain::entities::{Click, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and reading clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Resolves an active link for a visit and records the click.
    ///
    /// The active check, destination resolution (see
    /// [`crate::domain::resolver::resolve`]), counter increment, last-click
    /// stamp and click insert are applied as one unit: either all of them
    /// persist or none do.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Click))` with the recorded click
    /// - `Ok(None)` if no active link has this token; nothing is written
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors and
    /// [`AppError::Internal`] if the resolved destination cannot be sent as a
    /// `Location` header; nothing is written in either case.
    async fn record_visit(&self, token: &str, visit: Visit) -> Result<Option<Click>, AppError>;

    /// Aggregates a link's clicks without loading the whole history.
    ///
    /// Totals, the device breakdown and the daily timeline cover every click;
    /// only the most recent [`crate::domain::analytics::RECENT_CLICKS_LIMIT`]
    /// clicks are returned individually, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors and
    /// [`AppError::Internal`] for an unknown stored device type.
    async fn summarize(&self, link_id: i64) -> Result<ClickSummary, AppError>;
}
