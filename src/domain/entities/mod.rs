//! Core domain entities.
//!
//! - [`Link`] - A named set of destinations addressed by a token
//! - [`Click`] - One recorded redirect
//! - [`Visit`] - Request metadata captured before a redirect is recorded
//!
//! Creation inputs live next to their entity (`NewLink`).

pub mod click;
pub mod link;

pub use click::{Click, Visit};
pub use link::{Link, NewLink, PlatformUrls};
