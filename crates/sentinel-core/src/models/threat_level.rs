use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{
    CRITICAL_THRESHOLD, HIGH_THRESHOLD, LOW_THRESHOLD, MEDIUM_THRESHOLD, RISK_SCORE_MAX,
    RISK_SCORE_MIN,
};
use crate::errors::SentinelError;

/// Ordered categorical severity bucket derived from a risk score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Normal,
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    /// All levels in ascending order.
    pub const ALL: [ThreatLevel; 5] = [
        ThreatLevel::Normal,
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
        ThreatLevel::Critical,
    ];

    /// Map a risk score to its bucket.
    ///
    /// Buckets are inclusive-lower, exclusive-upper except the last:
    /// `[0,20)` normal, `[20,40)` low, `[40,60)` medium, `[60,80)` high,
    /// `[80,100]` critical. Scores outside `[0,100]` are clamped; NaN is
    /// treated as 0.
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() {
            RISK_SCORE_MIN
        } else {
            score.clamp(RISK_SCORE_MIN, RISK_SCORE_MAX)
        };
        if score < LOW_THRESHOLD {
            ThreatLevel::Normal
        } else if score < MEDIUM_THRESHOLD {
            ThreatLevel::Low
        } else if score < HIGH_THRESHOLD {
            ThreatLevel::Medium
        } else if score < CRITICAL_THRESHOLD {
            ThreatLevel::High
        } else {
            ThreatLevel::Critical
        }
    }

    /// Medium, high, and critical activities need investigation and raise alerts.
    pub fn is_suspicious(self) -> bool {
        matches!(
            self,
            ThreatLevel::Medium | ThreatLevel::High | ThreatLevel::Critical
        )
    }

    /// The persisted label.
    pub fn as_str(self) -> &'static str {
        match self {
            ThreatLevel::Normal => "normal",
            ThreatLevel::Low => "low",
            ThreatLevel::Medium => "medium",
            ThreatLevel::High => "high",
            ThreatLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreatLevel {
    type Err = SentinelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(ThreatLevel::Normal),
            "low" => Ok(ThreatLevel::Low),
            "medium" => Ok(ThreatLevel::Medium),
            "high" => Ok(ThreatLevel::High),
            "critical" => Ok(ThreatLevel::Critical),
            other => Err(SentinelError::InvalidThreatLevel {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_inclusive_lower() {
        assert_eq!(ThreatLevel::from_score(0.0), ThreatLevel::Normal);
        assert_eq!(ThreatLevel::from_score(19.99), ThreatLevel::Normal);
        assert_eq!(ThreatLevel::from_score(20.0), ThreatLevel::Low);
        assert_eq!(ThreatLevel::from_score(40.0), ThreatLevel::Medium);
        assert_eq!(ThreatLevel::from_score(60.0), ThreatLevel::High);
        assert_eq!(ThreatLevel::from_score(79.99), ThreatLevel::High);
        assert_eq!(ThreatLevel::from_score(80.0), ThreatLevel::Critical);
        assert_eq!(ThreatLevel::from_score(100.0), ThreatLevel::Critical);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(ThreatLevel::from_score(-5.0), ThreatLevel::Normal);
        assert_eq!(ThreatLevel::from_score(250.0), ThreatLevel::Critical);
        assert_eq!(ThreatLevel::from_score(f64::NAN), ThreatLevel::Normal);
    }
}
