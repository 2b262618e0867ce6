//! Domain layer: entities, repository contracts and the redirect rules.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`platform`] - Client descriptor classification
//! - [`resolver`] - Destination selection for a classified client
//! - [`analytics`] - Click summary types
//!
//! Nothing in this layer depends on HTTP or on a concrete store.
//!
//! # Redirect Flow
//!
//! 1. HTTP handler extracts the descriptor and origin address into a [`entities::Visit`]
//! 2. [`repositories::ClickRepository::record_visit`] locks the active link
//! 3. [`resolver::resolve`] picks the destination and device type
//! 4. Counter update and click insert commit together

pub mod analytics;
pub mod entities;
pub mod platform;
pub mod repositories;
pub mod resolver;
