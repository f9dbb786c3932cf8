use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Summary counters derived from one batch of activities. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    /// Activities bucketed normal or low.
    pub normal_users: usize,
    /// Activities bucketed medium, high, or critical.
    pub suspicious_users: usize,
    /// Activities bucketed critical. Counts activities, not alert records.
    pub critical_alerts: usize,
    /// Mean risk score rounded to one decimal; 0 for an empty batch.
    pub average_risk_score: f64,
    /// Configured constant, not computed.
    pub detection_accuracy: f64,
}
