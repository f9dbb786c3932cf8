//! Application start-up: background seeding plus the dashboard service.

use std::sync::Arc;

use tokio::task::JoinHandle;

use sentinel_core::config::SentinelConfig;
use sentinel_core::traits::IThreatStore;
use sentinel_seed::{RngSource, SeedOutcome, SeedStage, Synthesizer};

use crate::service::DashboardService;

pub struct DashboardApp {
    config: SentinelConfig,
    store: Arc<dyn IThreatStore>,
    service: Arc<DashboardService>,
}

impl DashboardApp {
    pub fn new(config: SentinelConfig, store: Arc<dyn IThreatStore>) -> Self {
        let service = Arc::new(DashboardService::new(
            Arc::clone(&store),
            config.dashboard.clone(),
        ));
        Self {
            config,
            store,
            service,
        }
    }

    pub fn service(&self) -> &Arc<DashboardService> {
        &self.service
    }

    /// Seed the store on a blocking task and return immediately.
    ///
    /// Nothing waits on the task; the handle may be dropped. Reads issued
    /// meanwhile may see an empty or partly seeded store. Failures are
    /// logged, never retried. Must be called from within a tokio runtime.
    pub fn start(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let service = Arc::clone(&self.service);
        let seed_config = self.config.seed.clone();

        tokio::task::spawn_blocking(move || {
            let mut synthesizer = Synthesizer::new(store, RngSource::from_entropy(), seed_config);
            match synthesizer.seed() {
                Ok(SeedOutcome::AlreadySeeded) => {}
                Ok(SeedOutcome::Seeded(report)) => {
                    tracing::info!(
                        activities = report.rows(SeedStage::Activities),
                        alerts = report.rows(SeedStage::Alerts),
                        complete = report.is_complete(),
                        "sample data seeded"
                    );
                    service.refresh();
                }
                Err(e) => tracing::error!(error = %e, "seeding failed"),
            }
        })
    }
}
