//! # marquee-observability
//!
//! Structured logging for Marquee: subscriber initialization and named events.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
