use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Static evaluation snapshot of a named detection model, as persisted in
/// `ml_model_metrics`. Purely informational; immutable after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MlModelMetrics {
    pub id: String,
    pub model_type: String,
    pub accuracy: f64,
    pub precision_score: f64,
    pub recall_score: f64,
    pub f1_score: f64,
    pub false_positive_rate: f64,
    pub training_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for `ml_model_metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MlModelMetricsDraft {
    pub model_type: String,
    pub accuracy: f64,
    pub precision_score: f64,
    pub recall_score: f64,
    pub f1_score: f64,
    pub false_positive_rate: f64,
    pub training_date: DateTime<Utc>,
}
