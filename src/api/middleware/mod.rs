//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Per-request spans with status and latency

pub mod tracing;
