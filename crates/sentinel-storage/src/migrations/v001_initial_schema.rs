//! v001: user_activities, threat_alerts, ml_model_metrics.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS user_activities (
    id                        TEXT PRIMARY KEY,
    user_identifier           TEXT NOT NULL,
    username                  TEXT NOT NULL,
    department                TEXT NOT NULL,
    login_time                TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    logout_time               TEXT,
    access_frequency          INTEGER NOT NULL DEFAULT 0 CHECK (access_frequency >= 0),
    files_accessed            INTEGER NOT NULL DEFAULT 0 CHECK (files_accessed >= 0),
    failed_login_attempts     INTEGER NOT NULL DEFAULT 0 CHECK (failed_login_attempts >= 0),
    after_hours_access        INTEGER NOT NULL DEFAULT 0,
    unusual_data_transfer     INTEGER NOT NULL DEFAULT 0,
    sensitive_files_accessed  INTEGER NOT NULL DEFAULT 0 CHECK (sensitive_files_accessed >= 0),
    risk_score                REAL NOT NULL DEFAULT 0 CHECK (risk_score >= 0 AND risk_score <= 100),
    threat_level              TEXT NOT NULL DEFAULT 'normal',
    is_anomaly                INTEGER NOT NULL DEFAULT 0,
    created_at                TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE IF NOT EXISTS threat_alerts (
    id                TEXT PRIMARY KEY,
    user_activity_id  TEXT REFERENCES user_activities(id) ON DELETE SET NULL,
    alert_type        TEXT NOT NULL,
    severity          TEXT NOT NULL,
    description       TEXT NOT NULL,
    is_acknowledged   INTEGER NOT NULL DEFAULT 0,
    created_at        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE IF NOT EXISTS ml_model_metrics (
    id                   TEXT PRIMARY KEY,
    model_type           TEXT NOT NULL,
    accuracy             REAL NOT NULL,
    precision_score      REAL NOT NULL,
    recall_score         REAL NOT NULL,
    f1_score             REAL NOT NULL,
    false_positive_rate  REAL NOT NULL,
    training_date        TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    created_at           TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
";
