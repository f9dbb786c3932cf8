use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ThreatLevel;
use crate::errors::SentinelError;

/// Alert severity. Same ordered domain as [`ThreatLevel`] without `normal`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// The persisted label.
    pub fn as_str(self) -> &'static str {
        ThreatLevel::from(self).as_str()
    }
}

impl From<Severity> for ThreatLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => ThreatLevel::Low,
            Severity::Medium => ThreatLevel::Medium,
            Severity::High => ThreatLevel::High,
            Severity::Critical => ThreatLevel::Critical,
        }
    }
}

impl TryFrom<ThreatLevel> for Severity {
    type Error = SentinelError;

    fn try_from(level: ThreatLevel) -> Result<Self, Self::Error> {
        match level {
            ThreatLevel::Normal => Err(SentinelError::InvalidSeverity {
                value: level.to_string(),
            }),
            ThreatLevel::Low => Ok(Severity::Low),
            ThreatLevel::Medium => Ok(Severity::Medium),
            ThreatLevel::High => Ok(Severity::High),
            ThreatLevel::Critical => Ok(Severity::Critical),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SentinelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = ThreatLevel::from_str(s).map_err(|_| SentinelError::InvalidSeverity {
            value: s.to_string(),
        })?;
        Severity::try_from(level)
    }
}
