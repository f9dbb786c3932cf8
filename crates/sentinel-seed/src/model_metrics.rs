//! The two static model-metrics rows written by every seed.

use chrono::{DateTime, Utc};

use sentinel_core::models::MlModelMetricsDraft;

pub const ISOLATION_FOREST: &str = "Isolation Forest";
pub const RANDOM_FOREST: &str = "Random Forest";

/// One unsupervised and one supervised model, hardcoded numbers, both
/// trained at `now`.
pub fn baseline_model_metrics(now: DateTime<Utc>) -> Vec<MlModelMetricsDraft> {
    vec![
        MlModelMetricsDraft {
            model_type: ISOLATION_FOREST.to_string(),
            accuracy: 0.9234,
            precision_score: 0.8912,
            recall_score: 0.9456,
            f1_score: 0.9176,
            false_positive_rate: 0.0523,
            training_date: now,
        },
        MlModelMetricsDraft {
            model_type: RANDOM_FOREST.to_string(),
            accuracy: 0.9567,
            precision_score: 0.9234,
            recall_score: 0.9678,
            f1_score: 0.9451,
            false_positive_rate: 0.0312,
            training_date: now,
        },
    ]
}
