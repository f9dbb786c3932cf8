//! Seed pipeline against a real in-memory store and against a store with
//! injected failures.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sentinel_core::config::SeedConfig;
use sentinel_core::errors::{SentinelError, SentinelResult, StorageError};
use sentinel_core::models::{
    MlModelMetrics, MlModelMetricsDraft, ThreatAlert, ThreatAlertDraft, ThreatLevel,
    UserActivity, UserActivityDraft,
};
use sentinel_core::query::{AlertExpansion, AlertPatch, Query};
use sentinel_core::traits::IThreatStore;
use sentinel_seed::{RngSource, SeedOutcome, SeedStage, SequenceSource, StageOutcome, Synthesizer};
use sentinel_storage::StorageEngine;
use test_fixtures::{activity_draft, fixed_now};

fn memory_store() -> Arc<StorageEngine> {
    Arc::new(StorageEngine::open_in_memory().unwrap())
}

fn failure(what: &str) -> SentinelError {
    StorageError::SqliteError {
        message: format!("{what} unavailable"),
    }
    .into()
}

/// Delegates to an in-memory engine, failing the flagged operations.
#[derive(Default)]
struct FlakyStore {
    inner: Option<StorageEngine>,
    fail_select: AtomicBool,
    fail_activities: AtomicBool,
    fail_alerts: AtomicBool,
    fail_metrics: AtomicBool,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: Some(StorageEngine::open_in_memory().unwrap()),
            ..Self::default()
        }
    }

    fn inner(&self) -> &StorageEngine {
        self.inner.as_ref().unwrap()
    }
}

impl IThreatStore for FlakyStore {
    fn select_activities(&self, query: &Query) -> SentinelResult<Vec<UserActivity>> {
        if self.fail_select.load(Ordering::SeqCst) {
            return Err(failure("select"));
        }
        self.inner().select_activities(query)
    }

    fn insert_activities(&self, drafts: &[UserActivityDraft]) -> SentinelResult<Vec<UserActivity>> {
        if self.fail_activities.load(Ordering::SeqCst) {
            return Err(failure("user_activities"));
        }
        self.inner().insert_activities(drafts)
    }

    fn select_alerts(&self, query: &Query, expansion: AlertExpansion) -> SentinelResult<Vec<ThreatAlert>> {
        self.inner().select_alerts(query, expansion)
    }

    fn insert_alerts(&self, drafts: &[ThreatAlertDraft]) -> SentinelResult<Vec<ThreatAlert>> {
        if self.fail_alerts.load(Ordering::SeqCst) {
            return Err(failure("threat_alerts"));
        }
        self.inner().insert_alerts(drafts)
    }

    fn update_alerts(&self, patch: &AlertPatch, query: &Query) -> SentinelResult<usize> {
        self.inner().update_alerts(patch, query)
    }

    fn select_model_metrics(&self, query: &Query) -> SentinelResult<Vec<MlModelMetrics>> {
        self.inner().select_model_metrics(query)
    }

    fn insert_model_metrics(&self, drafts: &[MlModelMetricsDraft]) -> SentinelResult<Vec<MlModelMetrics>> {
        if self.fail_metrics.load(Ordering::SeqCst) {
            return Err(failure("ml_model_metrics"));
        }
        self.inner().insert_model_metrics(drafts)
    }
}

#[test]
fn seeds_default_batch() {
    let store = memory_store();
    let mut synth = Synthesizer::new(store.clone(), RngSource::seeded(42), SeedConfig::default());
    assert!(!synth.is_seeded().unwrap());

    let outcome = synth.seed_at(fixed_now()).unwrap();
    let report = outcome.report().unwrap();
    assert!(report.is_complete());
    assert_eq!(report.rows(SeedStage::Activities), 50);
    assert_eq!(report.rows(SeedStage::ModelMetrics), 2);
    let order: Vec<SeedStage> = report.stages().iter().map(|r| r.stage).collect();
    assert_eq!(order, SeedStage::ALL.to_vec());

    let activities = store.select_activities(&Query::new()).unwrap();
    assert_eq!(activities.len(), 50);
    assert_eq!(activities.iter().filter(|a| a.is_anomaly).count(), 10);
    for a in &activities {
        assert!((0.0..=100.0).contains(&a.risk_score));
        assert_eq!(a.threat_level, ThreatLevel::from_score(a.risk_score));
        assert!(a.login_time <= fixed_now());
        if let Some(logout) = a.logout_time {
            assert!(logout >= a.login_time && logout <= fixed_now());
        }
    }
    assert!(synth.is_seeded().unwrap());
}

#[test]
fn one_alert_per_elevated_activity() {
    let store = memory_store();
    let mut synth = Synthesizer::new(store.clone(), RngSource::seeded(7), SeedConfig::default());
    synth.seed_at(fixed_now()).unwrap();

    let elevated: Vec<UserActivity> = store
        .select_activities(&Query::new())
        .unwrap()
        .into_iter()
        .filter(|a| a.threat_level.is_suspicious())
        .collect();
    let alerts = store
        .select_alerts(&Query::new(), AlertExpansion::UserActivity)
        .unwrap();

    assert_eq!(alerts.len(), elevated.len());
    for alert in &alerts {
        let activity = alert.user_activity.as_ref().unwrap();
        assert!(activity.threat_level.is_suspicious());
        assert_eq!(ThreatLevel::from(alert.severity), activity.threat_level);
    }
}

#[test]
fn second_seed_is_a_no_op() {
    let store = memory_store();
    let mut synth = Synthesizer::new(store.clone(), RngSource::seeded(1), SeedConfig::default());
    assert!(matches!(synth.seed_at(fixed_now()).unwrap(), SeedOutcome::Seeded(_)));
    assert_eq!(synth.seed_at(fixed_now()).unwrap(), SeedOutcome::AlreadySeeded);

    assert_eq!(store.select_activities(&Query::new()).unwrap().len(), 50);
    assert_eq!(store.select_model_metrics(&Query::new()).unwrap().len(), 2);
}

#[test]
fn existing_data_is_never_merged() {
    let store = memory_store();
    store.insert_activities(&[activity_draft("preexisting", 5.0)]).unwrap();

    let mut synth = Synthesizer::new(store.clone(), RngSource::seeded(9), SeedConfig::default());
    assert_eq!(synth.seed().unwrap(), SeedOutcome::AlreadySeeded);
    assert_eq!(store.select_activities(&Query::new()).unwrap().len(), 1);
    assert!(store.select_model_metrics(&Query::new()).unwrap().is_empty());
}

#[test]
fn failed_check_writes_nothing() {
    let store = Arc::new(FlakyStore::new());
    store.fail_select.store(true, Ordering::SeqCst);

    let mut synth = Synthesizer::new(store.clone(), RngSource::seeded(2), SeedConfig::default());
    assert!(synth.seed_at(fixed_now()).is_err());

    store.fail_select.store(false, Ordering::SeqCst);
    assert!(store.select_activities(&Query::new()).unwrap().is_empty());
    assert!(store.select_model_metrics(&Query::new()).unwrap().is_empty());
}

#[test]
fn failed_activities_skip_alerts_but_not_metrics() {
    let store = Arc::new(FlakyStore::new());
    store.fail_activities.store(true, Ordering::SeqCst);

    let mut synth = Synthesizer::new(store.clone(), RngSource::seeded(3), SeedConfig::default());
    let outcome = synth.seed_at(fixed_now()).unwrap();
    let report = outcome.report().unwrap();

    assert!(!report.is_complete());
    assert!(matches!(
        report.outcome(SeedStage::Activities),
        Some(StageOutcome::Failed { .. })
    ));
    assert!(matches!(
        report.outcome(SeedStage::Alerts),
        Some(StageOutcome::Skipped { .. })
    ));
    assert_eq!(report.rows(SeedStage::ModelMetrics), 2);
}

#[test]
fn failed_alerts_keep_prior_and_later_stages() {
    let store = Arc::new(FlakyStore::new());
    store.fail_alerts.store(true, Ordering::SeqCst);

    // Constant 0.0 draws make every anomalous activity critical.
    let config = SeedConfig {
        normal_count: 2,
        anomalous_count: 2,
        ..SeedConfig::default()
    };
    let mut synth = Synthesizer::new(store.clone(), SequenceSource::constant(0.0), config);
    let report = synth.seed_at(fixed_now()).unwrap().report().cloned().unwrap();

    assert_eq!(report.rows(SeedStage::Activities), 4);
    assert!(matches!(
        report.outcome(SeedStage::Alerts),
        Some(StageOutcome::Failed { .. })
    ));
    assert_eq!(report.rows(SeedStage::ModelMetrics), 2);
    // No rollback of the activities stage.
    assert_eq!(store.select_activities(&Query::new()).unwrap().len(), 4);
}

#[test]
fn top_of_normal_range_raises_alerts() {
    let store = memory_store();
    let config = SeedConfig {
        normal_count: 5,
        anomalous_count: 0,
        ..SeedConfig::default()
    };
    // 0.999 draws: 15 + 12 + 10 + 6 = 43 with both flags off, i.e. medium.
    let mut synth = Synthesizer::new(store.clone(), SequenceSource::constant(0.999), config);
    let report = synth.seed_at(fixed_now()).unwrap().report().cloned().unwrap();
    assert_eq!(report.rows(SeedStage::Alerts), 5);
}

#[test]
fn low_risk_batch_skips_alerts() {
    let store = memory_store();
    let config = SeedConfig {
        normal_count: 3,
        anomalous_count: 0,
        ..SeedConfig::default()
    };
    // 0.5 draws: 8 + 6.6 + 10 + 3 = 27.6 with both flags off, i.e. low.
    let mut synth = Synthesizer::new(store.clone(), SequenceSource::constant(0.5), config);
    let report = synth.seed_at(fixed_now()).unwrap().report().cloned().unwrap();
    assert!(matches!(
        report.outcome(SeedStage::Alerts),
        Some(StageOutcome::Skipped { .. })
    ));
    assert!(report.is_complete());
    assert!(store
        .select_alerts(&Query::new(), AlertExpansion::None)
        .unwrap()
        .is_empty());
}

#[test]
fn unvalidated_huge_windows_still_seed() {
    let store = memory_store();
    let config = SeedConfig {
        normal_count: 4,
        anomalous_count: 1,
        login_window_hours: u32::MAX,
        max_session_hours: u32::MAX,
    };
    let mut synth = Synthesizer::new(store.clone(), RngSource::seeded(3), config);
    let report = synth.seed_at(fixed_now()).unwrap().report().cloned().unwrap();

    assert_eq!(report.rows(SeedStage::Activities), 5);
    for activity in store.select_activities(&Query::new()).unwrap() {
        assert!(activity.login_time <= fixed_now());
        assert!(activity.logout_time.map_or(true, |t| t <= fixed_now()));
    }
}
