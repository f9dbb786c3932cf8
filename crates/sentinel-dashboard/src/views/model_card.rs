use serde::Serialize;
use ts_rs::TS;

use sentinel_core::models::MlModelMetrics;

use super::grades::{format_percent, MetricGrade, ModelFamily};

/// One metric value with its display text and grade.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MetricCell {
    pub value: f64,
    pub display: String,
    pub grade: MetricGrade,
}

impl MetricCell {
    fn score(value: f64) -> Self {
        Self {
            value,
            display: format_percent(value),
            grade: MetricGrade::for_score(value),
        }
    }

    fn rate(value: f64) -> Self {
        Self {
            value,
            display: format_percent(value),
            grade: MetricGrade::for_rate(value),
        }
    }
}

/// A model metrics card.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ModelMetricsView {
    pub model_type: String,
    pub family: ModelFamily,
    pub accuracy: MetricCell,
    pub precision: MetricCell,
    pub recall: MetricCell,
    pub f1_score: MetricCell,
    pub false_positive_rate: MetricCell,
    pub training_date: chrono::DateTime<chrono::Utc>,
}

impl From<&MlModelMetrics> for ModelMetricsView {
    fn from(m: &MlModelMetrics) -> Self {
        Self {
            model_type: m.model_type.clone(),
            family: ModelFamily::for_model(&m.model_type),
            accuracy: MetricCell::score(m.accuracy),
            precision: MetricCell::score(m.precision_score),
            recall: MetricCell::score(m.recall_score),
            f1_score: MetricCell::score(m.f1_score),
            false_positive_rate: MetricCell::rate(m.false_positive_rate),
            training_date: m.training_date,
        }
    }
}
