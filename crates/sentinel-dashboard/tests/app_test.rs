//! Application start-up: background seeding against an in-memory store.

use std::sync::Arc;

use sentinel_core::config::SentinelConfig;
use sentinel_core::traits::IThreatStore;
use sentinel_dashboard::{DashboardApp, QueryKey};
use sentinel_storage::StorageEngine;
use test_fixtures::fixed_now;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

#[test]
fn start_seeds_and_refreshes_the_dashboard() {
    let store: Arc<dyn IThreatStore> = Arc::new(StorageEngine::open_in_memory().unwrap());
    let app = DashboardApp::new(SentinelConfig::default(), Arc::clone(&store));

    // Warm the cache with the empty store.
    assert!(app.service().activities().unwrap().is_empty());

    let rt = runtime();
    let handle = {
        let _guard = rt.enter();
        app.start()
    };
    rt.block_on(handle).unwrap();

    assert!(!app.service().cache().contains(QueryKey::UserActivities));
    let snapshot = app.service().snapshot_at(fixed_now());
    assert_eq!(snapshot.stats.total_users, 50);
    assert_eq!(snapshot.model_metrics.len(), 2);
    let alerts = app.service().alerts().unwrap();
    assert!(alerts.iter().all(|a| a.user_activity.is_some()));
}

#[test]
fn restart_does_not_reseed() {
    let store: Arc<dyn IThreatStore> = Arc::new(StorageEngine::open_in_memory().unwrap());
    let rt = runtime();

    for _ in 0..2 {
        let app = DashboardApp::new(SentinelConfig::default(), Arc::clone(&store));
        let handle = {
            let _guard = rt.enter();
            app.start()
        };
        rt.block_on(handle).unwrap();
    }

    let app = DashboardApp::new(SentinelConfig::default(), store);
    assert_eq!(app.service().activities().unwrap().len(), 50);
}
