//! StorageEngine: owns the ConnectionPool, runs migrations on open,
//! implements IThreatStore.

use std::path::Path;

use rusqlite::Connection;

use sentinel_core::config::StorageConfig;
use sentinel_core::constants::MAX_BULK_BATCH_SIZE;
use sentinel_core::errors::{SentinelError, SentinelResult};
use sentinel_core::models::{
    MlModelMetrics, MlModelMetricsDraft, ThreatAlert, ThreatAlertDraft, UserActivity,
    UserActivityDraft,
};
use sentinel_core::query::{AlertExpansion, AlertPatch, Query};
use sentinel_core::traits::IThreatStore;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{activity_ops, alert_ops, metrics_ops};

/// SQLite-backed threat store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed engine with default pool settings.
    pub fn open(path: &Path) -> SentinelResult<Self> {
        Self::open_with_config(&StorageConfig {
            db_path: path.display().to_string(),
            ..StorageConfig::default()
        })
    }

    /// Open a file-backed engine from the storage section of the config.
    pub fn open_with_config(config: &StorageConfig) -> SentinelResult<Self> {
        let path = Path::new(&config.db_path);
        let mut pool = ConnectionPool::open(path, config.busy_timeout_ms)?;
        pool.writer.with_conn_sync(migrations::run_migrations)?;
        pool.attach_readers(config.read_pool_size, config.busy_timeout_ms)?;
        tracing::info!(
            db_path = %config.db_path,
            readers = config.read_pool_size,
            "storage engine opened"
        );
        Ok(Self { pool })
    }

    /// Open an in-memory engine. All reads go through the writer, since a
    /// second in-memory connection would see a different database.
    pub fn open_in_memory() -> SentinelResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.writer.with_conn_sync(migrations::run_migrations)?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version.
    pub fn schema_version(&self) -> SentinelResult<u32> {
        self.pool.writer.with_conn_sync(migrations::current_version)
    }

    fn with_reader<F, T>(&self, f: F) -> SentinelResult<T>
    where
        F: FnOnce(&Connection) -> SentinelResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn_sync(f),
        }
    }
}

fn check_batch(table: &str, len: usize) -> SentinelResult<()> {
    if len > MAX_BULK_BATCH_SIZE {
        return Err(SentinelError::InvalidQuery {
            reason: format!(
                "{table} batch of {len} rows exceeds the limit of {MAX_BULK_BATCH_SIZE}"
            ),
        });
    }
    Ok(())
}

impl IThreatStore for StorageEngine {
    fn select_activities(&self, query: &Query) -> SentinelResult<Vec<UserActivity>> {
        self.with_reader(|conn| activity_ops::select_activities(conn, query))
    }

    fn insert_activities(&self, drafts: &[UserActivityDraft]) -> SentinelResult<Vec<UserActivity>> {
        check_batch("user_activities", drafts.len())?;
        self.pool
            .writer
            .with_conn_sync(|conn| activity_ops::insert_activities(conn, drafts))
    }

    fn select_alerts(
        &self,
        query: &Query,
        expansion: AlertExpansion,
    ) -> SentinelResult<Vec<ThreatAlert>> {
        self.with_reader(|conn| alert_ops::select_alerts(conn, query, expansion))
    }

    fn insert_alerts(&self, drafts: &[ThreatAlertDraft]) -> SentinelResult<Vec<ThreatAlert>> {
        check_batch("threat_alerts", drafts.len())?;
        self.pool
            .writer
            .with_conn_sync(|conn| alert_ops::insert_alerts(conn, drafts))
    }

    fn update_alerts(&self, patch: &AlertPatch, query: &Query) -> SentinelResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| alert_ops::update_alerts(conn, patch, query))
    }

    fn select_model_metrics(&self, query: &Query) -> SentinelResult<Vec<MlModelMetrics>> {
        self.with_reader(|conn| metrics_ops::select_model_metrics(conn, query))
    }

    fn insert_model_metrics(
        &self,
        drafts: &[MlModelMetricsDraft],
    ) -> SentinelResult<Vec<MlModelMetrics>> {
        check_batch("ml_model_metrics", drafts.len())?;
        self.pool
            .writer
            .with_conn_sync(|conn| metrics_ops::insert_model_metrics(conn, drafts))
    }
}
