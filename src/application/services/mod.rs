//! Business logic services for the application layer.

pub mod analytics_service;
pub mod link_service;
pub mod redirect_service;

pub use analytics_service::{AnalyticsService, LinkAnalytics};
pub use link_service::LinkService;
pub use redirect_service::RedirectService;
