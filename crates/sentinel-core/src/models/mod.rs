pub mod behavior_signals;
pub mod dashboard_stats;
pub mod model_metrics;
pub mod severity;
pub mod threat_alert;
pub mod threat_level;
pub mod user_activity;

pub use behavior_signals::BehaviorSignals;
pub use dashboard_stats::DashboardStats;
pub use model_metrics::{MlModelMetrics, MlModelMetricsDraft};
pub use severity::Severity;
pub use threat_alert::{ThreatAlert, ThreatAlertDraft};
pub use threat_level::ThreatLevel;
pub use user_activity::{UserActivity, UserActivityDraft};
