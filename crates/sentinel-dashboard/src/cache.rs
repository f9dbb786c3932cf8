//! Query result cache using moka, keyed by dashboard query.
//!
//! Entries expire after a TTL; writes that change a query's result
//! invalidate its key.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use sentinel_core::errors::SentinelResult;
use sentinel_core::models::{MlModelMetrics, ThreatAlert, UserActivity};

/// The three dashboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    UserActivities,
    ThreatAlerts,
    MlModelMetrics,
}

impl QueryKey {
    pub const ALL: [QueryKey; 3] = [
        QueryKey::UserActivities,
        QueryKey::ThreatAlerts,
        QueryKey::MlModelMetrics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKey::UserActivities => "user-activities",
            QueryKey::ThreatAlerts => "threat-alerts",
            QueryKey::MlModelMetrics => "ml-model-metrics",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
enum CachedRows {
    Activities(Arc<Vec<UserActivity>>),
    Alerts(Arc<Vec<ThreatAlert>>),
    Metrics(Arc<Vec<MlModelMetrics>>),
}

/// Cached results of the dashboard queries. Failed loads are not cached.
///
/// Every invalidation bumps a generation counter. A load that started before
/// an invalidation returns its rows to the caller but does not cache them, so
/// a query racing a refresh cannot reinstate pre-refresh results.
pub struct QueryCache {
    cache: Cache<QueryKey, CachedRows>,
    generation: AtomicU64,
}

impl QueryCache {
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder().time_to_live(ttl).build();
        Self {
            cache,
            generation: AtomicU64::new(0),
        }
    }

    pub fn activities(
        &self,
        load: impl FnOnce() -> SentinelResult<Vec<UserActivity>>,
    ) -> SentinelResult<Arc<Vec<UserActivity>>> {
        if let Some(CachedRows::Activities(rows)) = self.cache.get(&QueryKey::UserActivities) {
            return Ok(rows);
        }
        let started = self.generation();
        let rows = Arc::new(load()?);
        self.insert_if_current(
            QueryKey::UserActivities,
            CachedRows::Activities(Arc::clone(&rows)),
            started,
        );
        Ok(rows)
    }

    pub fn alerts(
        &self,
        load: impl FnOnce() -> SentinelResult<Vec<ThreatAlert>>,
    ) -> SentinelResult<Arc<Vec<ThreatAlert>>> {
        if let Some(CachedRows::Alerts(rows)) = self.cache.get(&QueryKey::ThreatAlerts) {
            return Ok(rows);
        }
        let started = self.generation();
        let rows = Arc::new(load()?);
        self.insert_if_current(
            QueryKey::ThreatAlerts,
            CachedRows::Alerts(Arc::clone(&rows)),
            started,
        );
        Ok(rows)
    }

    pub fn model_metrics(
        &self,
        load: impl FnOnce() -> SentinelResult<Vec<MlModelMetrics>>,
    ) -> SentinelResult<Arc<Vec<MlModelMetrics>>> {
        if let Some(CachedRows::Metrics(rows)) = self.cache.get(&QueryKey::MlModelMetrics) {
            return Ok(rows);
        }
        let started = self.generation();
        let rows = Arc::new(load()?);
        self.insert_if_current(
            QueryKey::MlModelMetrics,
            CachedRows::Metrics(Arc::clone(&rows)),
            started,
        );
        Ok(rows)
    }

    pub fn contains(&self, key: QueryKey) -> bool {
        self.cache.contains_key(&key)
    }

    pub fn invalidate(&self, key: QueryKey) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cache.invalidate(&key);
    }

    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cache.invalidate_all();
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    // The check and the insert are not atomic together; an invalidation
    // landing between them is covered by the TTL.
    fn insert_if_current(&self, key: QueryKey, rows: CachedRows, started: u64) {
        if self.generation() == started {
            self.cache.insert(key, rows);
        } else {
            tracing::debug!(query = %key, "skipped caching a result loaded before invalidation");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_read_is_served_from_cache() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let loads = Cell::new(0);
        let load = || {
            loads.set(loads.get() + 1);
            Ok(Vec::new())
        };
        cache.activities(load).unwrap();
        cache.activities(load).unwrap();
        assert_eq!(loads.get(), 1);
        assert!(cache.contains(QueryKey::UserActivities));
    }

    #[test]
    fn invalidate_forces_reload() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let loads = Cell::new(0);
        let load = || {
            loads.set(loads.get() + 1);
            Ok(Vec::new())
        };
        cache.alerts(load).unwrap();
        cache.invalidate(QueryKey::ThreatAlerts);
        cache.alerts(load).unwrap();
        assert_eq!(loads.get(), 2);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let failed = cache.model_metrics(|| {
            Err(sentinel_core::SentinelError::InvalidQuery {
                reason: "down".to_string(),
            })
        });
        assert!(failed.is_err());
        assert!(!cache.contains(QueryKey::MlModelMetrics));
    }

    #[test]
    fn load_racing_an_invalidation_is_not_cached() {
        let cache = QueryCache::new(Duration::from_secs(60));
        // The store query is still running when a refresh lands.
        let rows = cache
            .activities(|| {
                cache.invalidate_all();
                Ok(Vec::new())
            })
            .unwrap();
        assert!(rows.is_empty());
        assert!(!cache.contains(QueryKey::UserActivities));

        // The next load starts after the refresh and is cached.
        cache.activities(|| Ok(Vec::new())).unwrap();
        assert!(cache.contains(QueryKey::UserActivities));
    }

    #[test]
    fn keys_match_query_names() {
        let names: Vec<&str> = QueryKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["user-activities", "threat-alerts", "ml-model-metrics"]);
    }
}
