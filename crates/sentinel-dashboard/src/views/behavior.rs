//! Scatter and timeline data for the behavior charts.

use serde::Serialize;
use ts_rs::TS;

use sentinel_core::models::{ThreatLevel, UserActivity};

/// Access frequency against files accessed, one point per activity.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct BehaviorPoint {
    pub username: String,
    pub access_frequency: u32,
    pub files_accessed: u32,
    pub risk_score: f64,
    pub threat_level: ThreatLevel,
    pub is_anomaly: bool,
}

impl From<&UserActivity> for BehaviorPoint {
    fn from(a: &UserActivity) -> Self {
        Self {
            username: a.username.clone(),
            access_frequency: a.access_frequency,
            files_accessed: a.files_accessed,
            risk_score: a.risk_score,
            threat_level: a.threat_level,
            is_anomaly: a.is_anomaly,
        }
    }
}

impl BehaviorPoint {
    pub fn from_activities(activities: &[UserActivity]) -> Vec<Self> {
        activities.iter().map(Self::from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct TimelinePoint {
    /// 1-based position in the timeline.
    pub index: usize,
    pub risk_score: f64,
    /// 1 for an anomalous activity, else 0.
    pub anomalies: u8,
}

/// Risk of the most recent activities, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct RiskTimeline {
    pub points: Vec<TimelinePoint>,
}

impl RiskTimeline {
    /// The last `len` activities by `created_at` ascending. The input is not
    /// reordered; ties keep input order.
    pub fn from_activities(activities: &[UserActivity], len: usize) -> Self {
        let mut ordered: Vec<&UserActivity> = activities.iter().collect();
        ordered.sort_by_key(|a| a.created_at);
        let skip = ordered.len().saturating_sub(len);

        let points = ordered
            .into_iter()
            .skip(skip)
            .enumerate()
            .map(|(i, a)| TimelinePoint {
                index: i + 1,
                risk_score: a.risk_score,
                anomalies: u8::from(a.is_anomaly),
            })
            .collect();
        Self { points }
    }
}
