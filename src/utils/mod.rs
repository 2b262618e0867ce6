//! Helpers shared across layers.
//!
//! - [`token_generator`] - Random link tokens
//! - [`destination`] - Destination URL checks
//! - [`request_origin`] - Public base URL from request headers
//! - [`client_ip`] - Origin address extraction
//! - [`db_error`] - Store error classification

pub mod client_ip;
pub mod db_error;
pub mod destination;
pub mod request_origin;
pub mod token_generator;
