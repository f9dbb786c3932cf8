use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{BehaviorSignals, ThreatLevel};

/// One observed session of a monitored identity, as persisted in
/// `user_activities`.
///
/// `is_anomaly` is ground truth fixed at generation time. It is independent
/// of `threat_level` and the two may disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserActivity {
    /// Store-assigned UUID.
    pub id: String,
    /// External-facing user code, e.g. `USR4K2ZQ9`.
    pub user_identifier: String,
    pub username: String,
    pub department: String,
    pub login_time: DateTime<Utc>,
    /// `None` when the session is still open or the logout is unknown.
    pub logout_time: Option<DateTime<Utc>>,
    pub access_frequency: u32,
    pub files_accessed: u32,
    pub failed_login_attempts: u32,
    pub after_hours_access: bool,
    pub unusual_data_transfer: bool,
    pub sensitive_files_accessed: u32,
    /// Composite risk in `[0, 100]`.
    pub risk_score: f64,
    pub threat_level: ThreatLevel,
    pub is_anomaly: bool,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
}

impl UserActivity {
    /// The behavioral inputs of this record.
    pub fn signals(&self) -> BehaviorSignals {
        BehaviorSignals {
            access_frequency: self.access_frequency,
            files_accessed: self.files_accessed,
            failed_login_attempts: self.failed_login_attempts,
            sensitive_files_accessed: self.sensitive_files_accessed,
            after_hours_access: self.after_hours_access,
            unusual_data_transfer: self.unusual_data_transfer,
        }
    }

    /// Whether the session has no recorded logout.
    pub fn is_open_session(&self) -> bool {
        self.logout_time.is_none()
    }
}

/// Insert shape for `user_activities`: everything except the store-assigned
/// `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserActivityDraft {
    pub user_identifier: String,
    pub username: String,
    pub department: String,
    pub login_time: DateTime<Utc>,
    pub logout_time: Option<DateTime<Utc>>,
    pub access_frequency: u32,
    pub files_accessed: u32,
    pub failed_login_attempts: u32,
    pub after_hours_access: bool,
    pub unusual_data_transfer: bool,
    pub sensitive_files_accessed: u32,
    pub risk_score: f64,
    pub threat_level: ThreatLevel,
    pub is_anomaly: bool,
}

impl UserActivityDraft {
    /// The behavioral inputs of this draft.
    pub fn signals(&self) -> BehaviorSignals {
        BehaviorSignals {
            access_frequency: self.access_frequency,
            files_accessed: self.files_accessed,
            failed_login_attempts: self.failed_login_attempts,
            sensitive_files_accessed: self.sensitive_files_accessed,
            after_hours_access: self.after_hours_access,
            unusual_data_transfer: self.unusual_data_transfer,
        }
    }

    /// Attach the store-assigned identity.
    pub fn into_activity(self, id: String, created_at: DateTime<Utc>) -> UserActivity {
        UserActivity {
            id,
            user_identifier: self.user_identifier,
            username: self.username,
            department: self.department,
            login_time: self.login_time,
            logout_time: self.logout_time,
            access_frequency: self.access_frequency,
            files_accessed: self.files_accessed,
            failed_login_attempts: self.failed_login_attempts,
            after_hours_access: self.after_hours_access,
            unusual_data_transfer: self.unusual_data_transfer,
            sensitive_files_accessed: self.sensitive_files_accessed,
            risk_score: self.risk_score,
            threat_level: self.threat_level,
            is_anomaly: self.is_anomaly,
            created_at,
        }
    }
}
