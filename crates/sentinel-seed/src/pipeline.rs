//! The seed pipeline: activities, then alerts, then model metrics.
//!
//! Stages are independent writes with no transaction spanning them. A failed
//! stage is logged and recorded; later stages still run where their input
//! exists, so a partial seed is a possible end state.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use sentinel_core::config::SeedConfig;
use sentinel_core::errors::SentinelResult;
use sentinel_core::models::{ThreatAlertDraft, UserActivity, UserActivityDraft};
use sentinel_core::query::Query;
use sentinel_core::traits::IThreatStore;
use sentinel_observability::tracing_setup::events;
use sentinel_observability::{seed_span, seed_stage_span};

use crate::activity::ActivityGenerator;
use crate::alerts::AlertCatalog;
use crate::model_metrics::baseline_model_metrics;
use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedStage {
    Activities,
    Alerts,
    ModelMetrics,
}

impl SeedStage {
    /// Execution order.
    pub const ALL: [SeedStage; 3] = [
        SeedStage::Activities,
        SeedStage::Alerts,
        SeedStage::ModelMetrics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SeedStage::Activities => "activities",
            SeedStage::Alerts => "alerts",
            SeedStage::ModelMetrics => "model_metrics",
        }
    }
}

impl fmt::Display for SeedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Inserted { rows: usize },
    Skipped { reason: String },
    Failed { error: String },
}

impl StageOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            StageOutcome::Inserted { .. } => "inserted",
            StageOutcome::Skipped { .. } => "skipped",
            StageOutcome::Failed { .. } => "failed",
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            StageOutcome::Inserted { rows } => *rows,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: SeedStage,
    pub outcome: StageOutcome,
}

/// Per-stage outcomes of one seed run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    stages: Vec<StageReport>,
}

impl SeedReport {
    pub fn stages(&self) -> &[StageReport] {
        &self.stages
    }

    pub fn outcome(&self, stage: SeedStage) -> Option<&StageOutcome> {
        self.stages
            .iter()
            .find(|r| r.stage == stage)
            .map(|r| &r.outcome)
    }

    /// Rows written by `stage` (0 unless it inserted).
    pub fn rows(&self, stage: SeedStage) -> usize {
        self.outcome(stage).map_or(0, StageOutcome::rows)
    }

    /// True when no stage failed.
    pub fn is_complete(&self) -> bool {
        !self
            .stages
            .iter()
            .any(|r| matches!(r.outcome, StageOutcome::Failed { .. }))
    }

    fn record(&mut self, stage: SeedStage, outcome: StageOutcome) {
        match &outcome {
            StageOutcome::Failed { error } => events::seed_stage_failed(stage.as_str(), error),
            other => events::seed_stage_finished(stage.as_str(), other.label(), other.rows()),
        }
        self.stages.push(StageReport { stage, outcome });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held activities; nothing was written.
    AlreadySeeded,
    Seeded(SeedReport),
}

impl SeedOutcome {
    pub fn report(&self) -> Option<&SeedReport> {
        match self {
            SeedOutcome::AlreadySeeded => None,
            SeedOutcome::Seeded(report) => Some(report),
        }
    }
}

/// Run `write` as `stage`, record its outcome, return the rows on success.
fn run_stage<T>(
    report: &mut SeedReport,
    stage: SeedStage,
    write: impl FnOnce() -> SentinelResult<Vec<T>>,
) -> Option<Vec<T>> {
    let _span = seed_stage_span!(stage).entered();
    match write() {
        Ok(rows) => {
            report.record(stage, StageOutcome::Inserted { rows: rows.len() });
            Some(rows)
        }
        Err(e) => {
            report.record(stage, StageOutcome::Failed { error: e.to_string() });
            None
        }
    }
}

/// Seeds an empty store once.
pub struct Synthesizer<R: RandomSource> {
    store: Arc<dyn IThreatStore>,
    rng: R,
    config: SeedConfig,
    generator: ActivityGenerator,
    catalog: AlertCatalog,
}

impl<R: RandomSource> Synthesizer<R> {
    pub fn new(store: Arc<dyn IThreatStore>, rng: R, config: SeedConfig) -> Self {
        let generator = ActivityGenerator::from_config(&config);
        Self {
            store,
            rng,
            config,
            generator,
            catalog: AlertCatalog,
        }
    }

    /// Whether the store holds at least one activity.
    pub fn is_seeded(&self) -> SentinelResult<bool> {
        let existing = self.store.select_activities(&Query::new().limit(1))?;
        Ok(!existing.is_empty())
    }

    /// Seed as of the current time.
    pub fn seed(&mut self) -> SentinelResult<SeedOutcome> {
        self.seed_at(Utc::now())
    }

    /// Seed as of `now`. Returns an error only when the seeded check itself
    /// fails, in which case nothing is written.
    pub fn seed_at(&mut self, now: DateTime<Utc>) -> SentinelResult<SeedOutcome> {
        let _span = seed_span!(self.config.batch_size()).entered();

        if self.is_seeded()? {
            events::seed_skipped();
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut report = SeedReport::default();

        let drafts = self.activity_drafts(now);
        let store = Arc::clone(&self.store);
        let activities = run_stage(&mut report, SeedStage::Activities, || {
            store.insert_activities(&drafts)
        });

        match activities {
            None => report.record(
                SeedStage::Alerts,
                StageOutcome::Skipped {
                    reason: "activities were not inserted".to_string(),
                },
            ),
            Some(rows) => match self.alert_drafts(&rows) {
                Err(e) => report.record(
                    SeedStage::Alerts,
                    StageOutcome::Failed {
                        error: e.to_string(),
                    },
                ),
                Ok(alerts) if alerts.is_empty() => report.record(
                    SeedStage::Alerts,
                    StageOutcome::Skipped {
                        reason: "no activity at medium risk or above".to_string(),
                    },
                ),
                Ok(alerts) => {
                    run_stage(&mut report, SeedStage::Alerts, || store.insert_alerts(&alerts));
                }
            },
        }

        let metrics = baseline_model_metrics(now);
        run_stage(&mut report, SeedStage::ModelMetrics, || {
            store.insert_model_metrics(&metrics)
        });

        tracing::info!(complete = report.is_complete(), "seed finished");
        Ok(SeedOutcome::Seeded(report))
    }

    /// Normal drafts first, then anomalous.
    fn activity_drafts(&mut self, now: DateTime<Utc>) -> Vec<UserActivityDraft> {
        let normal = self.config.normal_count;
        let anomalous = self.config.anomalous_count;
        let mut drafts = Vec::with_capacity(normal + anomalous);
        for i in 0..normal + anomalous {
            drafts.push(self.generator.generate(&mut self.rng, i >= normal, now));
        }
        drafts
    }

    /// One alert per inserted activity at medium or above.
    fn alert_drafts(&mut self, activities: &[UserActivity]) -> SentinelResult<Vec<ThreatAlertDraft>> {
        activities
            .iter()
            .filter(|a| a.threat_level.is_suspicious())
            .map(|a| self.catalog.generate(&mut self.rng, &a.id, a.threat_level))
            .collect()
    }
}
