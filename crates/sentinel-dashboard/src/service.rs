//! DashboardService: cached reads of the three dashboard queries, alert
//! acknowledgement, snapshot assembly.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use sentinel_core::config::DashboardConfig;
use sentinel_core::errors::SentinelResult;
use sentinel_core::models::{DashboardStats, MlModelMetrics, ThreatAlert, UserActivity};
use sentinel_core::query::{AlertExpansion, AlertPatch, Direction, Query};
use sentinel_core::traits::IThreatStore;
use sentinel_observability::dashboard_span;
use sentinel_observability::tracing_setup::events;

use crate::cache::{QueryCache, QueryKey};
use crate::snapshot::DashboardSnapshot;
use crate::stats::StatsAggregator;
use crate::views::{ActivityFilter, ActivityRow};

pub struct DashboardService {
    store: Arc<dyn IThreatStore>,
    cache: QueryCache,
    aggregator: StatsAggregator,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(store: Arc<dyn IThreatStore>, config: DashboardConfig) -> Self {
        Self {
            store,
            cache: QueryCache::new(Duration::from_secs(config.cache_ttl_secs)),
            aggregator: StatsAggregator::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// All activities, highest risk first.
    pub fn activities(&self) -> SentinelResult<Arc<Vec<UserActivity>>> {
        self.cache.activities(|| {
            self.store
                .select_activities(&Query::new().order_by("risk_score", Direction::Desc))
        })
    }

    /// All alerts with their activity embedded, newest first.
    pub fn alerts(&self) -> SentinelResult<Arc<Vec<ThreatAlert>>> {
        self.cache.alerts(|| {
            self.store.select_alerts(
                &Query::new().order_by("created_at", Direction::Desc),
                AlertExpansion::UserActivity,
            )
        })
    }

    /// All model metrics rows, newest first.
    pub fn model_metrics(&self) -> SentinelResult<Arc<Vec<MlModelMetrics>>> {
        self.cache.model_metrics(|| {
            self.store
                .select_model_metrics(&Query::new().order_by("created_at", Direction::Desc))
        })
    }

    pub fn stats(&self) -> SentinelResult<DashboardStats> {
        let activities = self.activities()?;
        Ok(self.aggregator.compute(Some(activities.as_slice())))
    }

    /// Activity table rows matching `filter`, highest risk first.
    pub fn search_activities(&self, filter: &ActivityFilter) -> SentinelResult<Vec<ActivityRow>> {
        let activities = self.activities()?;
        Ok(filter
            .apply(&activities)
            .into_iter()
            .map(ActivityRow::from)
            .collect())
    }

    /// Mark one alert acknowledged. No version check: acknowledging an
    /// already acknowledged or unknown alert succeeds and changes nothing.
    pub fn acknowledge_alert(&self, alert_id: &str) -> SentinelResult<()> {
        let _span = dashboard_span!("acknowledge_alert").entered();
        let affected = self
            .store
            .update_alerts(&AlertPatch::acknowledge(), &Query::new().eq("id", alert_id))?;
        self.cache.invalidate(QueryKey::ThreatAlerts);
        events::alert_acknowledged(alert_id, affected);
        Ok(())
    }

    /// Drop every cached query result.
    pub fn refresh(&self) {
        self.cache.invalidate_all();
        tracing::debug!("dashboard cache invalidated");
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot_at(Utc::now())
    }

    /// Assemble every section as of `now`. A section whose query fails is
    /// logged and rendered empty; no error is surfaced to the caller.
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> DashboardSnapshot {
        let _span = dashboard_span!("snapshot").entered();
        let activities = section(QueryKey::UserActivities, self.activities());
        let alerts = section(QueryKey::ThreatAlerts, self.alerts());
        let metrics = section(QueryKey::MlModelMetrics, self.model_metrics());
        DashboardSnapshot::build(
            now,
            &self.aggregator,
            &self.config,
            &activities,
            &alerts,
            &metrics,
        )
    }
}

fn section<T>(key: QueryKey, result: SentinelResult<Arc<Vec<T>>>) -> Arc<Vec<T>> {
    result.unwrap_or_else(|e| {
        events::section_unavailable(key.as_str(), &e.to_string());
        Arc::new(Vec::new())
    })
}
