use serde::{Deserialize, Serialize};

use super::defaults;

/// Sample-data seeding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Activities generated from the normal behavior profile.
    pub normal_count: usize,
    /// Activities generated from the anomalous behavior profile.
    pub anomalous_count: usize,
    /// Trailing window (hours, ending now) that login times are drawn from.
    pub login_window_hours: u32,
    /// Longest generated session (hours).
    pub max_session_hours: u32,
}

impl SeedConfig {
    /// Total activities in one seed batch.
    pub fn batch_size(&self) -> usize {
        self.normal_count + self.anomalous_count
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            normal_count: defaults::DEFAULT_NORMAL_COUNT,
            anomalous_count: defaults::DEFAULT_ANOMALOUS_COUNT,
            login_window_hours: defaults::DEFAULT_LOGIN_WINDOW_HOURS,
            max_session_hours: defaults::DEFAULT_MAX_SESSION_HOURS,
        }
    }
}
