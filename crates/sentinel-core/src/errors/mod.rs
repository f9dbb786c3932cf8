//! Error handling for Sentinel.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod sentinel_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use sentinel_error::{SentinelError, SentinelResult};
pub use storage_error::StorageError;
