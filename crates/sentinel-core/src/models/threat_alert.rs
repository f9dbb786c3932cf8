use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Severity, UserActivity};

/// A notification tied to one activity that crossed a risk threshold, as
/// persisted in `threat_alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThreatAlert {
    pub id: String,
    /// Reference into `user_activities`. Many alerts may reference one activity.
    pub user_activity_id: Option<String>,
    pub alert_type: String,
    pub severity: Severity,
    pub description: String,
    /// Flips false -> true exactly once; never reverted.
    pub is_acknowledged: bool,
    pub created_at: DateTime<Utc>,
    /// Embedded activity when the read requested the join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_activity: Option<Box<UserActivity>>,
}

/// Insert shape for `threat_alerts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThreatAlertDraft {
    pub user_activity_id: Option<String>,
    pub alert_type: String,
    pub severity: Severity,
    pub description: String,
    pub is_acknowledged: bool,
}
