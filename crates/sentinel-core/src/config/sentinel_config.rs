//! Top-level Sentinel configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DashboardConfig, ObservabilityConfig, SeedConfig, StorageConfig};
use crate::constants::{MAX_BULK_BATCH_SIZE, MAX_LOGIN_WINDOW_HOURS, MAX_SESSION_HOURS};
use crate::errors::ConfigError;

/// Environment variable overriding `storage.db_path`.
pub const ENV_DB_PATH: &str = "SENTINEL_DB_PATH";

/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "SENTINEL_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SENTINEL_*`)
/// 2. Config file (`sentinel.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SentinelConfig {
    pub storage: StorageConfig,
    pub seed: SeedConfig,
    pub dashboard: DashboardConfig,
    pub observability: ObservabilityConfig,
}

impl SentinelConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SENTINEL_*` overrides resolved through `lookup`.
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db_path) = lookup(ENV_DB_PATH).filter(|v| !v.is_empty()) {
            self.storage.db_path = db_path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.observability.log_level = level;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=8).contains(&self.storage.read_pool_size) {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be between 1 and 8".to_string(),
            });
        }
        if self.seed.batch_size() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "seed".to_string(),
                message: "normal_count + anomalous_count must be greater than 0".to_string(),
            });
        }
        // One seed writes its activities in a single bulk insert.
        if self.seed.batch_size() > MAX_BULK_BATCH_SIZE {
            return Err(ConfigError::ValidationFailed {
                field: "seed".to_string(),
                message: format!(
                    "normal_count + anomalous_count must not exceed {MAX_BULK_BATCH_SIZE}"
                ),
            });
        }
        if !(1..=MAX_LOGIN_WINDOW_HOURS).contains(&self.seed.login_window_hours) {
            return Err(ConfigError::ValidationFailed {
                field: "seed.login_window_hours".to_string(),
                message: format!("must be between 1 and {MAX_LOGIN_WINDOW_HOURS}"),
            });
        }
        if !(1..=MAX_SESSION_HOURS).contains(&self.seed.max_session_hours) {
            return Err(ConfigError::ValidationFailed {
                field: "seed.max_session_hours".to_string(),
                message: format!("must be between 1 and {MAX_SESSION_HOURS}"),
            });
        }
        if !(0.0..=100.0).contains(&self.dashboard.detection_accuracy) {
            return Err(ConfigError::ValidationFailed {
                field: "dashboard.detection_accuracy".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        Ok(())
    }
}
