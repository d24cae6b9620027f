//! Connection provider
//!
//! Hands out one freshly opened, configured SQLite connection per call. There
//! is no pool: the caller owns the connection and drops it when done.

use crate::errors::{connection_error, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Store locator used when none is given
pub const DEFAULT_DB_PATH: &str = "sqlite.db";

/// How long a writer waits on a locked database before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Locator for an existing SQLite store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    path: PathBuf,
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open an independent connection to the store
    ///
    /// The file must already exist; a missing or unreadable store fails with
    /// `ExErrorKind::Connection` instead of creating an empty database.
    pub fn acquire(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&self.path, flags)
            .map_err(|e| connection_error(&self.path, e))?;
        configure(&conn).map_err(|e| connection_error(&self.path, e))?;

        Ok(conn)
    }
}

/// Configure a connection: foreign keys, WAL and a busy timeout
///
/// This is also the first statement to touch the file, so a path that is not
/// a database fails here.
fn configure(conn: &Connection) -> rusqlite::Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;

    // genre_id must reference an existing genre
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    // WAL lets readers proceed while another connection inserts
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
        row.get::<_, String>(0)
    })?;

    Ok(())
}
