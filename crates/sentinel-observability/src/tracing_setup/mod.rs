//! Tracing setup: subscriber initialization, span definitions, event helpers.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sentinel_core::config::ObservabilityConfig;

/// Environment variable holding an `EnvFilter` directive string,
/// e.g. `SENTINEL_LOG=sentinel_storage=debug,info`.
pub const LOG_ENV_VAR: &str = "SENTINEL_LOG";

static INIT: Once = Once::new();

/// Build the filter: `SENTINEL_LOG` when set and valid, otherwise the
/// configured level, otherwise `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber. Only the first call has any effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber installed earlier (e.g. by a test harness) wins.
        let _ = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
