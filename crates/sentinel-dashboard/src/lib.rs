//! # sentinel-dashboard
//!
//! Read side of Sentinel: summary statistics over the activity batch,
//! derived views for each dashboard section, cached store reads, alert
//! acknowledgement, and application start-up with background seeding.

pub mod app;
pub mod cache;
pub mod service;
pub mod snapshot;
pub mod stats;
pub mod views;

pub use app::DashboardApp;
pub use cache::{QueryCache, QueryKey};
pub use service::DashboardService;
pub use snapshot::DashboardSnapshot;
pub use stats::{compute_stats, StatsAggregator};
