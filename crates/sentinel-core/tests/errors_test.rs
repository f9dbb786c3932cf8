use sentinel_core::errors::*;

#[test]
fn invalid_alert_level_carries_level() {
    let err = SentinelError::InvalidAlertLevel {
        level: "low".into(),
    };
    assert!(err.to_string().contains("low"));
}

#[test]
fn unknown_column_carries_table_and_column() {
    let err = SentinelError::UnknownColumn {
        table: "threat_alerts".into(),
        column: "owner".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("threat_alerts"));
    assert!(msg.contains("owner"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_sentinel_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: SentinelError = storage_err.into();
    assert!(matches!(err, SentinelError::Storage(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn config_error_converts_to_sentinel_error() {
    let config_err = ConfigError::FileNotFound {
        path: "/etc/sentinel.toml".into(),
    };
    let err: SentinelError = config_err.into();
    assert!(matches!(err, SentinelError::Config(_)));
    assert!(err.to_string().contains("/etc/sentinel.toml"));
}

#[test]
fn migration_failure_reports_version() {
    let err = StorageError::MigrationFailed {
        version: 1,
        reason: "table exists".into(),
    };
    assert!(err.to_string().contains("version 1"));
}
