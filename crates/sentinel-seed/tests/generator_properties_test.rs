//! Property tests over the activity generator and risk score.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use sentinel_core::models::{BehaviorSignals, ThreatLevel};
use sentinel_seed::{generate_alert, risk_score, ActivityGenerator, SequenceSource};

fn signals_strategy() -> impl Strategy<Value = BehaviorSignals> {
    (0u32..500, 0u32..500, 0u32..50, 0u32..100, any::<bool>(), any::<bool>()).prop_map(
        |(access, files, failed, sensitive, ah, ut)| BehaviorSignals {
            access_frequency: access,
            files_accessed: files,
            failed_login_attempts: failed,
            sensitive_files_accessed: sensitive,
            after_hours_access: ah,
            unusual_data_transfer: ut,
        },
    )
}

proptest! {
    #[test]
    fn prop_score_in_range_and_deterministic(signals in signals_strategy()) {
        let a = risk_score(&signals);
        let b = risk_score(&signals);
        prop_assert!((0.0..=100.0).contains(&a));
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn prop_generated_activity_is_consistent(
        draws in prop::collection::vec(0.0f64..1.0, 1..40),
        is_anomalous in any::<bool>(),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let gen = ActivityGenerator::default();
        let draft = gen.generate(&mut SequenceSource::new(draws), is_anomalous, now);

        prop_assert!((0.0..=100.0).contains(&draft.risk_score));
        prop_assert_eq!(draft.threat_level, ThreatLevel::from_score(draft.risk_score));
        prop_assert_eq!(draft.risk_score, risk_score(&draft.signals()));
        prop_assert_eq!(draft.is_anomaly, is_anomalous);
        prop_assert!(draft.login_time <= now);
        prop_assert!(draft.login_time >= now - Duration::hours(168));
        if let Some(logout) = draft.logout_time {
            prop_assert!(logout >= draft.login_time);
            prop_assert!(logout <= now);
            prop_assert!(logout - draft.login_time <= Duration::hours(8));
        }
    }

    #[test]
    fn prop_alert_severity_matches_level(
        draws in prop::collection::vec(0.0f64..1.0, 1..10),
        level in prop::sample::select(vec![ThreatLevel::Medium, ThreatLevel::High, ThreatLevel::Critical]),
    ) {
        let alert = generate_alert(&mut SequenceSource::new(draws), "activity", level).unwrap();
        prop_assert_eq!(ThreatLevel::from(alert.severity), level);
    }
}
