use std::str::FromStr;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use sentinel_core::models::*;
use sentinel_core::SentinelError;

fn draft(score: f64) -> UserActivityDraft {
    UserActivityDraft {
        user_identifier: "USRABC123".into(),
        username: "Sarah Garcia".into(),
        department: "Finance".into(),
        login_time: Utc.with_ymd_and_hms(2026, 10, 12, 9, 30, 0).unwrap(),
        logout_time: None,
        access_frequency: 12,
        files_accessed: 8,
        failed_login_attempts: 1,
        after_hours_access: false,
        unusual_data_transfer: true,
        sensitive_files_accessed: 2,
        risk_score: score,
        threat_level: ThreatLevel::from_score(score),
        is_anomaly: false,
    }
}

#[test]
fn threat_levels_are_ordered() {
    assert!(ThreatLevel::Normal < ThreatLevel::Low);
    assert!(ThreatLevel::Low < ThreatLevel::Medium);
    assert!(ThreatLevel::Medium < ThreatLevel::High);
    assert!(ThreatLevel::High < ThreatLevel::Critical);
    assert_eq!(ThreatLevel::ALL.len(), 5);
}

#[test]
fn threat_level_serializes_lowercase() {
    let json = serde_json::to_string(&ThreatLevel::Critical).unwrap();
    assert_eq!(json, "\"critical\"");
    let back: ThreatLevel = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(back, ThreatLevel::Medium);
}

#[test]
fn threat_level_rejects_unknown_label() {
    let err = ThreatLevel::from_str("severe").unwrap_err();
    assert!(matches!(err, SentinelError::InvalidThreatLevel { ref value } if value == "severe"));
}

#[test]
fn suspicious_levels_are_medium_and_above() {
    let suspicious: Vec<_> = ThreatLevel::ALL
        .into_iter()
        .filter(|l| l.is_suspicious())
        .collect();
    assert_eq!(
        suspicious,
        vec![ThreatLevel::Medium, ThreatLevel::High, ThreatLevel::Critical]
    );
}

#[test]
fn severity_rejects_normal_level() {
    assert!(Severity::try_from(ThreatLevel::Normal).is_err());
    assert_eq!(Severity::try_from(ThreatLevel::Low).unwrap(), Severity::Low);
    assert_eq!(
        Severity::try_from(ThreatLevel::Critical).unwrap(),
        Severity::Critical
    );
    assert!(Severity::from_str("normal").is_err());
    assert_eq!(Severity::from_str("high").unwrap(), Severity::High);
}

#[test]
fn severity_round_trips_through_threat_level() {
    for severity in [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ] {
        let level = ThreatLevel::from(severity);
        assert_eq!(Severity::try_from(level).unwrap(), severity);
        assert_eq!(level.as_str(), severity.as_str());
    }
}

#[test]
fn draft_into_activity_keeps_fields_and_signals() {
    let created = Utc.with_ymd_and_hms(2026, 10, 12, 10, 0, 0).unwrap();
    let d = draft(55.0);
    let signals = d.signals();
    let activity = d.clone().into_activity("a-1".into(), created);

    assert_eq!(activity.id, "a-1");
    assert_eq!(activity.created_at, created);
    assert_eq!(activity.threat_level, ThreatLevel::Medium);
    assert_eq!(activity.signals(), signals);
    assert!(activity.is_open_session());
}

#[test]
fn alert_without_embedded_activity_omits_the_field() {
    let alert = ThreatAlert {
        id: "t-1".into(),
        user_activity_id: Some("a-1".into()),
        alert_type: "Mass File Download".into(),
        severity: Severity::High,
        description: "Large volume of sensitive files downloaded in short timeframe.".into(),
        is_acknowledged: false,
        created_at: Utc::now(),
        user_activity: None,
    };
    let value = serde_json::to_value(&alert).unwrap();
    assert!(value.get("user_activity").is_none());
    assert_eq!(value["severity"], "high");
}

#[test]
fn dashboard_stats_serialize_camel_case() {
    let stats = DashboardStats {
        total_users: 3,
        normal_users: 1,
        suspicious_users: 2,
        critical_alerts: 1,
        average_risk_score: 50.0,
        detection_accuracy: 94.5,
    };
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["totalUsers"], 3);
    assert_eq!(value["averageRiskScore"], 50.0);
    assert_eq!(value["detectionAccuracy"], 94.5);
}

proptest! {
    #[test]
    fn every_score_maps_to_its_bucket(score in 0.0f64..=100.0) {
        let level = ThreatLevel::from_score(score);
        let expected = if score < 20.0 {
            ThreatLevel::Normal
        } else if score < 40.0 {
            ThreatLevel::Low
        } else if score < 60.0 {
            ThreatLevel::Medium
        } else if score < 80.0 {
            ThreatLevel::High
        } else {
            ThreatLevel::Critical
        };
        prop_assert_eq!(level, expected);
    }

    #[test]
    fn from_score_is_monotonic(a in -50.0f64..150.0, b in -50.0f64..150.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ThreatLevel::from_score(lo) <= ThreatLevel::from_score(hi));
    }
}
