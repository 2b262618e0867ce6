//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod create;
pub mod health;
pub mod redirect;
pub mod stats;

pub use analytics::analytics_handler;
pub use create::create_handler;
pub use health::{health_handler, readiness_handler, root_handler};
pub use redirect::redirect_handler;
pub use stats::stats_handler;
