pub mod dashboard_config;
pub mod defaults;
pub mod observability_config;
pub mod seed_config;
pub mod sentinel_config;
pub mod storage_config;

pub use dashboard_config::DashboardConfig;
pub use observability_config::ObservabilityConfig;
pub use seed_config::SeedConfig;
pub use sentinel_config::SentinelConfig;
pub use storage_config::StorageConfig;
