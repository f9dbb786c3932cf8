use super::{ConfigError, StorageError};

/// Top-level error for every Sentinel operation.
#[derive(Debug, thiserror::Error)]
pub enum SentinelError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid threat level: {value}")]
    InvalidThreatLevel { value: String },

    #[error("invalid severity: {value}")]
    InvalidSeverity { value: String },

    /// Alerts are only raised for medium, high, and critical activities.
    #[error("cannot raise an alert for threat level {level}")]
    InvalidAlertLevel { level: String },

    #[error("unknown column {column} on table {table}")]
    UnknownColumn { table: String, column: String },

    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type SentinelResult<T> = Result<T, SentinelError>;
