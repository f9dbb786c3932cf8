//! # sentinel-core
//!
//! Foundation crate for the Sentinel insider-threat dashboard.
//! Defines the persisted data model, the store trait, the query model,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod query;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SentinelConfig;
pub use errors::{SentinelError, SentinelResult};
pub use models::{
    BehaviorSignals, DashboardStats, MlModelMetrics, MlModelMetricsDraft, Severity, ThreatAlert,
    ThreatAlertDraft, ThreatLevel, UserActivity, UserActivityDraft,
};
pub use query::{AlertExpansion, AlertPatch, Direction, FilterValue, Query, Table};
pub use traits::IThreatStore;
