use serde::Serialize;
use ts_rs::TS;

use sentinel_core::models::{ThreatLevel, UserActivity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct DistributionBucket {
    pub level: ThreatLevel,
    pub count: usize,
}

/// Activity count per threat level, one bucket per level in level order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ThreatDistribution {
    pub buckets: Vec<DistributionBucket>,
}

impl ThreatDistribution {
    pub fn from_activities(activities: &[UserActivity]) -> Self {
        let buckets = ThreatLevel::ALL
            .iter()
            .map(|&level| DistributionBucket {
                level,
                count: activities.iter().filter(|a| a.threat_level == level).count(),
            })
            .collect();
        Self { buckets }
    }

    pub fn count(&self, level: ThreatLevel) -> usize {
        self.buckets
            .iter()
            .find(|b| b.level == level)
            .map_or(0, |b| b.count)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}
