//! Derived, presentation-ready views over fetched rows. Everything here is
//! pure: rows in, view out.

pub mod activity_table;
pub mod alerts_panel;
pub mod behavior;
pub mod distribution;
pub mod grades;
pub mod model_card;

pub use activity_table::{ActivityFilter, ActivityRow, LevelFilter};
pub use alerts_panel::{format_time_ago, AlertEntry, AlertsPanelView};
pub use behavior::{BehaviorPoint, RiskTimeline, TimelinePoint};
pub use distribution::{DistributionBucket, ThreatDistribution};
pub use grades::{format_percent, MetricGrade, ModelFamily, RiskBand};
pub use model_card::{MetricCell, ModelMetricsView};
