use serde::{Deserialize, Serialize};

use super::defaults;

/// Dashboard read-side configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Detection accuracy (percent) reported in the stats header.
    pub detection_accuracy: f64,
    /// How long a fetched query result stays cached (seconds).
    pub cache_ttl_secs: u64,
    /// Number of most recent activities in the risk timeline.
    pub timeline_len: usize,
    /// Acknowledged alerts listed under the active ones.
    pub acknowledged_preview: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            detection_accuracy: defaults::DEFAULT_DETECTION_ACCURACY,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            timeline_len: defaults::DEFAULT_TIMELINE_LEN,
            acknowledged_preview: defaults::DEFAULT_ACKNOWLEDGED_PREVIEW,
        }
    }
}
