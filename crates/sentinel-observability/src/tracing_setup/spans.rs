//! Span definitions for the seed pipeline and the dashboard.

/// Span around one whole seed run.
#[macro_export]
macro_rules! seed_span {
    ($batch_size:expr) => {
        tracing::info_span!("sentinel.seed", batch_size = $batch_size)
    };
}

/// Span around one seed stage (activities, alerts, model metrics).
#[macro_export]
macro_rules! seed_stage_span {
    ($stage:expr) => {
        tracing::info_span!("sentinel.seed.stage", stage = %$stage)
    };
}

/// Span around a dashboard operation.
#[macro_export]
macro_rules! dashboard_span {
    ($operation:expr) => {
        tracing::info_span!("sentinel.dashboard", operation = %$operation)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEED: &str = "sentinel.seed";
    pub const SEED_STAGE: &str = "sentinel.seed.stage";
    pub const DASHBOARD: &str = "sentinel.dashboard";
}
