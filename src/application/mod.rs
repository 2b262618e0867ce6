//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules and give HTTP
//! handlers and the admin CLI a single API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup and toggling
//! - [`services::redirect_service::RedirectService`] - Visit resolution and click recording
//! - [`services::analytics_service::AnalyticsService`] - Stats and click analytics

pub mod services;
