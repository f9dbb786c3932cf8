//! # sentinel-storage
//!
//! SQLite implementation of [`IThreatStore`](sentinel_core::IThreatStore).
//! One writer behind an async mutex, a small read pool in file-backed mode,
//! `user_version` migrations, and per-table query modules.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use sentinel_core::errors::StorageError;
use sentinel_core::SentinelError;

/// Helper to convert a message into a [`SentinelError`] via [`StorageError`].
pub(crate) fn to_storage_err(message: String) -> SentinelError {
    StorageError::SqliteError { message }.into()
}
