//! Fixture loader and record builders shared by the workspace's tests.
//!
//! JSON fixtures live under `fixtures/` next to this crate's manifest.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;

use sentinel_core::models::{
    MlModelMetricsDraft, Severity, ThreatAlertDraft, ThreatLevel, UserActivityDraft,
};

/// Root directory of the JSON fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load activity drafts from `fixtures/activities/<name>.json`.
pub fn load_activity_drafts(name: &str) -> Vec<UserActivityDraft> {
    load_fixture(&format!("activities/{name}.json"))
}

/// A fixed reference instant, whole seconds so it survives the store's
/// millisecond timestamp precision.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// A minimal activity with the given score; threat level follows the score.
pub fn activity_draft(username: &str, risk_score: f64) -> UserActivityDraft {
    let login_time = fixed_now() - Duration::hours(2);
    UserActivityDraft {
        user_identifier: format!(
            "USR{:0>6}",
            username.to_uppercase().chars().take(6).collect::<String>()
        ),
        username: username.to_string(),
        department: "Engineering".to_string(),
        login_time,
        logout_time: Some(login_time + Duration::hours(1)),
        access_frequency: 5,
        files_accessed: 10,
        failed_login_attempts: 0,
        after_hours_access: false,
        unusual_data_transfer: false,
        sensitive_files_accessed: 0,
        risk_score,
        threat_level: ThreatLevel::from_score(risk_score),
        is_anomaly: risk_score >= 60.0,
    }
}

/// An unacknowledged alert referencing `activity_id`.
pub fn alert_draft(activity_id: &str, severity: Severity) -> ThreatAlertDraft {
    ThreatAlertDraft {
        user_activity_id: Some(activity_id.to_string()),
        alert_type: "Suspicious Activity".to_string(),
        severity,
        description: "Anomalous behavior detected.".to_string(),
        is_acknowledged: false,
    }
}

pub fn metrics_draft(model_type: &str, accuracy: f64) -> MlModelMetricsDraft {
    MlModelMetricsDraft {
        model_type: model_type.to_string(),
        accuracy,
        precision_score: 0.9,
        recall_score: 0.9,
        f1_score: 0.9,
        false_positive_rate: 0.05,
        training_date: fixed_now() - Duration::days(7),
    }
}
