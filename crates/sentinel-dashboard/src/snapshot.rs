//! Every dashboard section in one serializable value.

use chrono::{DateTime, Utc};
use serde::Serialize;

use sentinel_core::config::DashboardConfig;
use sentinel_core::errors::SentinelResult;
use sentinel_core::models::{DashboardStats, MlModelMetrics, ThreatAlert, UserActivity};

use crate::stats::StatsAggregator;
use crate::views::{
    ActivityRow, AlertsPanelView, BehaviorPoint, ModelMetricsView, RiskTimeline,
    ThreatDistribution,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub stats: DashboardStats,
    pub distribution: ThreatDistribution,
    /// Highest risk first.
    pub activities: Vec<ActivityRow>,
    pub behavior: Vec<BehaviorPoint>,
    pub timeline: RiskTimeline,
    pub alerts: AlertsPanelView,
    pub model_metrics: Vec<ModelMetricsView>,
}

impl DashboardSnapshot {
    pub fn build(
        now: DateTime<Utc>,
        aggregator: &StatsAggregator,
        config: &DashboardConfig,
        activities: &[UserActivity],
        alerts: &[ThreatAlert],
        metrics: &[MlModelMetrics],
    ) -> Self {
        Self {
            generated_at: now,
            stats: aggregator.compute(Some(activities)),
            distribution: ThreatDistribution::from_activities(activities),
            activities: activities.iter().map(ActivityRow::from).collect(),
            behavior: BehaviorPoint::from_activities(activities),
            timeline: RiskTimeline::from_activities(activities, config.timeline_len),
            alerts: AlertsPanelView::new(alerts, config.acknowledged_preview, now),
            model_metrics: metrics.iter().map(ModelMetricsView::from).collect(),
        }
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> SentinelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
