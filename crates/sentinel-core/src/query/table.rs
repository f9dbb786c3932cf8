use std::fmt;

/// The three persisted tables. Names and columns are the persisted contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    UserActivities,
    ThreatAlerts,
    MlModelMetrics,
}

const USER_ACTIVITY_COLUMNS: &[&str] = &[
    "id",
    "user_identifier",
    "username",
    "department",
    "login_time",
    "logout_time",
    "access_frequency",
    "files_accessed",
    "failed_login_attempts",
    "after_hours_access",
    "unusual_data_transfer",
    "sensitive_files_accessed",
    "risk_score",
    "threat_level",
    "is_anomaly",
    "created_at",
];

const THREAT_ALERT_COLUMNS: &[&str] = &[
    "id",
    "user_activity_id",
    "alert_type",
    "severity",
    "description",
    "is_acknowledged",
    "created_at",
];

const ML_MODEL_METRICS_COLUMNS: &[&str] = &[
    "id",
    "model_type",
    "accuracy",
    "precision_score",
    "recall_score",
    "f1_score",
    "false_positive_rate",
    "training_date",
    "created_at",
];

impl Table {
    /// The table name as stored.
    pub fn name(self) -> &'static str {
        match self {
            Table::UserActivities => "user_activities",
            Table::ThreatAlerts => "threat_alerts",
            Table::MlModelMetrics => "ml_model_metrics",
        }
    }

    /// Column names in declaration order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::UserActivities => USER_ACTIVITY_COLUMNS,
            Table::ThreatAlerts => THREAT_ALERT_COLUMNS,
            Table::MlModelMetrics => ML_MODEL_METRICS_COLUMNS,
        }
    }

    pub fn has_column(self, column: &str) -> bool {
        self.columns().contains(&column)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
