use serde::Serialize;
use ts_rs::TS;

use sentinel_seed::model_metrics::ISOLATION_FOREST;

/// Color band of the risk gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Below 30.
    Low,
    /// 30 up to 60.
    Elevated,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskBand::Low
        } else if score < 60.0 {
            RiskBand::Elevated
        } else {
            RiskBand::High
        }
    }
}

/// Quality grade of a model metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MetricGrade {
    Good,
    Fair,
    Poor,
}

impl MetricGrade {
    /// Higher is better: above 0.9 good, above 0.8 fair.
    pub fn for_score(value: f64) -> Self {
        if value > 0.9 {
            MetricGrade::Good
        } else if value > 0.8 {
            MetricGrade::Fair
        } else {
            MetricGrade::Poor
        }
    }

    /// Lower is better (false-positive rate): below 0.05 good, below 0.1 fair.
    pub fn for_rate(value: f64) -> Self {
        if value < 0.05 {
            MetricGrade::Good
        } else if value < 0.1 {
            MetricGrade::Fair
        } else {
            MetricGrade::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Unsupervised,
    Supervised,
}

impl ModelFamily {
    pub fn for_model(model_type: &str) -> Self {
        if model_type == ISOLATION_FOREST {
            ModelFamily::Unsupervised
        } else {
            ModelFamily::Supervised
        }
    }
}

/// A `[0, 1]` ratio as a percentage with two decimals, e.g. `92.34%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}
