//! `sentinel [CONFIG]`: open the store, seed it if empty, print the
//! dashboard snapshot as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use sentinel_core::constants::VERSION;
use sentinel_core::SentinelConfig;
use sentinel_dashboard::DashboardApp;
use sentinel_observability::init_tracing;
use sentinel_storage::StorageEngine;

const DEFAULT_CONFIG_PATH: &str = "sentinel.toml";

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = SentinelConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    init_tracing(&config.observability);
    tracing::info!(version = VERSION, db_path = %config.storage.db_path, "sentinel starting");

    // Storage calls block; they run outside the runtime or on blocking tasks.
    let store = StorageEngine::open_with_config(&config.storage)
        .with_context(|| format!("opening {}", config.storage.db_path))?;
    let app = DashboardApp::new(config, Arc::new(store));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    let seeding = {
        let _guard = runtime.enter();
        app.start()
    };
    if let Err(e) = runtime.block_on(seeding) {
        tracing::error!(error = %e, "seeding task panicked");
    }

    let snapshot = app.service().snapshot();
    println!("{}", snapshot.to_json()?);
    Ok(())
}
