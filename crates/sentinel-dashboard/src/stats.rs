//! Summary counters over an activity batch. Pure, single pass, no I/O.

use sentinel_core::config::DashboardConfig;
use sentinel_core::constants::DETECTION_ACCURACY;
use sentinel_core::models::{DashboardStats, ThreatLevel, UserActivity};

/// Computes [`DashboardStats`] with a configured detection accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsAggregator {
    detection_accuracy: f64,
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new(DETECTION_ACCURACY)
    }
}

impl StatsAggregator {
    pub fn new(detection_accuracy: f64) -> Self {
        Self { detection_accuracy }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.detection_accuracy)
    }

    /// Reduce `activities` (absent is treated as empty).
    ///
    /// `critical_alerts` counts critical activities, not alert records.
    pub fn compute(&self, activities: Option<&[UserActivity]>) -> DashboardStats {
        let activities = activities.unwrap_or_default();

        let mut normal_users = 0;
        let mut suspicious_users = 0;
        let mut critical_alerts = 0;
        let mut risk_sum = 0.0;
        for activity in activities {
            if activity.threat_level.is_suspicious() {
                suspicious_users += 1;
            } else {
                normal_users += 1;
            }
            if activity.threat_level == ThreatLevel::Critical {
                critical_alerts += 1;
            }
            risk_sum += activity.risk_score;
        }

        let average_risk_score = if activities.is_empty() {
            0.0
        } else {
            round1(risk_sum / activities.len() as f64)
        };

        DashboardStats {
            total_users: activities.len(),
            normal_users,
            suspicious_users,
            critical_alerts,
            average_risk_score,
            detection_accuracy: self.detection_accuracy,
        }
    }
}

/// [`StatsAggregator::compute`] with the default detection accuracy.
pub fn compute_stats(activities: Option<&[UserActivity]>) -> DashboardStats {
    StatsAggregator::default().compute(activities)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
