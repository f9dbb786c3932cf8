//! # sentinel-observability
//!
//! Structured logging for the workspace: subscriber set-up, span macros,
//! and named events for the seed pipeline and dashboard.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LOG_ENV_VAR};
