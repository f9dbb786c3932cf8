//! Single write connection behind `tokio::sync::Mutex`.
//! Serialized writes, one call at a time.

use std::path::Path;

use rusqlite::Connection;
use tokio::sync::Mutex;

use sentinel_core::errors::SentinelResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single write connection protected by an async mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> SentinelResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> SentinelResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    /// Must not be called from inside an async task; use `spawn_blocking`.
    pub fn with_conn_sync<F, T>(&self, f: F) -> SentinelResult<T>
    where
        F: FnOnce(&Connection) -> SentinelResult<T>,
    {
        let guard = self.conn.blocking_lock();
        f(&guard)
    }
}
