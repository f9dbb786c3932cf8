//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use sentinel_core::errors::SentinelResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and, for file-backed databases,
/// the read connection pool.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases: a second in-memory connection would be
    /// a separate, empty database.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer for `path`. The read pool is opened separately with
    /// [`ConnectionPool::attach_readers`] once the schema exists, since
    /// read-only connections cannot create the file.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> SentinelResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool (writer only).
    pub fn open_in_memory() -> SentinelResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
            db_path: None,
        })
    }

    /// Open the read pool against the file the writer uses.
    pub fn attach_readers(&mut self, pool_size: usize, busy_timeout_ms: u32) -> SentinelResult<()> {
        if let Some(path) = &self.db_path {
            self.readers = Some(ReadPool::open(path, pool_size, busy_timeout_ms)?);
        }
        Ok(())
    }
}
