//! Alert catalog and alert draft generation.

use sentinel_core::errors::{SentinelError, SentinelResult};
use sentinel_core::models::{Severity, ThreatAlertDraft, ThreatLevel};

use crate::random::RandomSource;

/// Probability that a generated alert starts out acknowledged.
pub const ACKNOWLEDGED_PROBABILITY: f64 = 0.3;

/// Description used when a label has no mapped text.
pub const FALLBACK_DESCRIPTION: &str = "Anomalous behavior detected.";

const MEDIUM_LABELS: &[&str] = &[
    "After-Hours Access",
    "Failed Authentication Spike",
    "Unusual Login Pattern",
];

const HIGH_LABELS: &[&str] = &[
    "Unusual Data Access",
    "Privilege Escalation Attempt",
    "Mass File Download",
];

const CRITICAL_LABELS: &[&str] = &[
    "Data Exfiltration Detected",
    "Credential Compromise",
    "Malicious Script Execution",
];

const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Unusual Data Access",
        "User accessed significantly more files than baseline behavior suggests.",
    ),
    (
        "Privilege Escalation Attempt",
        "Detected attempt to access resources beyond authorized scope.",
    ),
    (
        "Mass File Download",
        "Large volume of sensitive files downloaded in short timeframe.",
    ),
    (
        "Data Exfiltration Detected",
        "Potential data exfiltration through unauthorized channels detected.",
    ),
    (
        "Credential Compromise",
        "Account shows signs of credential theft or unauthorized access.",
    ),
    (
        "Malicious Script Execution",
        "Suspicious script or code execution detected from user workstation.",
    ),
    (
        "After-Hours Access",
        "System access detected outside normal working hours.",
    ),
    (
        "Failed Authentication Spike",
        "Multiple failed login attempts detected for this account.",
    ),
    (
        "Unusual Login Pattern",
        "Login from unusual location or device detected.",
    ),
];

/// Severity-keyed alert labels and their descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertCatalog;

impl AlertCatalog {
    /// Sanctioned labels for `severity`. Empty for `Low`: no alert is
    /// raised below medium.
    pub fn labels(&self, severity: Severity) -> &'static [&'static str] {
        match severity {
            Severity::Low => &[],
            Severity::Medium => MEDIUM_LABELS,
            Severity::High => HIGH_LABELS,
            Severity::Critical => CRITICAL_LABELS,
        }
    }

    pub fn description(&self, label: &str) -> &'static str {
        DESCRIPTIONS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, d)| *d)
            .unwrap_or(FALLBACK_DESCRIPTION)
    }

    /// Build an alert for `activity_id` at `level`. The severity always
    /// equals `level`; normal and low are rejected.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        activity_id: &str,
        level: ThreatLevel,
    ) -> SentinelResult<ThreatAlertDraft> {
        let invalid = || SentinelError::InvalidAlertLevel {
            level: level.to_string(),
        };
        if !level.is_suspicious() {
            return Err(invalid());
        }
        let severity = Severity::try_from(level).map_err(|_| invalid())?;
        let alert_type = *rng.pick(self.labels(severity)).ok_or_else(invalid)?;

        Ok(ThreatAlertDraft {
            user_activity_id: Some(activity_id.to_string()),
            alert_type: alert_type.to_string(),
            severity,
            description: self.description(alert_type).to_string(),
            is_acknowledged: rng.chance(ACKNOWLEDGED_PROBABILITY),
        })
    }
}

/// [`AlertCatalog::generate`] with the default catalog.
pub fn generate_alert<R: RandomSource + ?Sized>(
    rng: &mut R,
    activity_id: &str,
    level: ThreatLevel,
) -> SentinelResult<ThreatAlertDraft> {
    AlertCatalog.generate(rng, activity_id, level)
}
