//! Database connection management
//!
//! Helpers for opening SQLite connections, plus [`Db`], the holder every
//! persistence operation reads its connection from.

use crate::errors::{connection_error, missing_connection, Result};
use rusqlite::Connection;
use std::cell::OnceCell;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(|e| connection_error("open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| connection_error("open_in_memory", e))
}

/// Configure a connection with the settings the demo schema expects
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", 1)
        .map_err(|e| connection_error("configure", e))?;

    // In-memory databases answer "memory" and keep their journal
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(|e| connection_error("configure", e))?;
    tracing::debug!(journal_mode = %mode, "Configured connection");

    Ok(())
}

/// Holder for the one connection shared by every entity type
///
/// The first handle injected through [`connect`](Db::connect) is kept for
/// the lifetime of the holder; later handles are dropped. Access is not
/// synchronised: a `Db` belongs to one thread, like the connection it holds.
#[derive(Debug, Default)]
pub struct Db {
    conn: OnceCell<Connection>,
}

impl Db {
    /// Create an empty holder; nothing works until a handle is injected
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holder that already owns `conn`
    pub fn with_connection(conn: Connection) -> Self {
        let db = Self::new();
        // A fresh cell is always empty
        let _ = db.conn.set(conn);
        db
    }

    /// Adopt `handle` if no connection is held yet, then return the held one
    ///
    /// ## Errors
    ///
    /// `ExErrorKind::Configuration` when no connection is held after the call.
    pub fn connect(&self, handle: Option<Connection>) -> Result<&Connection> {
        if let Some(handle) = handle {
            if self.conn.set(handle).is_err() {
                tracing::debug!("Connection already held; ignoring injected handle");
            }
        }
        self.conn.get().ok_or_else(missing_connection)
    }

    /// The held connection, or a configuration error
    pub fn connection(&self) -> Result<&Connection> {
        self.connect(None)
    }

    pub fn is_connected(&self) -> bool {
        self.conn.get().is_some()
    }
}
