//! Catalog storage module
//!
//! This module persists shows and their pending episodes in a local SQLite
//! database. A `CatalogStore` owns exactly one connection for the duration
//! of a command; every mutation runs inside `CatalogStore::transaction`.

mod models;
pub(crate) mod queries;

pub use models::{NewShow, PendingEpisode, Show, Status, UnknownStatus};

use log::debug;
use rusqlite::{Connection, Transaction};
use std::path::Path;
use thiserror::Error;

/// Schema applied whenever a store is opened
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS shows (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title_id TEXT NOT NULL,
    name TEXT NOT NULL UNIQUE,
    status TEXT NOT NULL DEFAULT 'watching'
        CHECK (status IN ('plan_to_watch', 'watching', 'on_hold', 'dropped', 'watched')),
    latest_episode INTEGER NOT NULL DEFAULT 0,
    last_watched INTEGER NOT NULL DEFAULT 0,
    rating REAL NOT NULL DEFAULT 0,
    imdb_link TEXT NOT NULL,
    notify INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS new_episodes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    show_id INTEGER NOT NULL,
    number INTEGER NOT NULL,
    title TEXT NOT NULL,
    plot TEXT,
    rating REAL NOT NULL DEFAULT 0,
    trailer_link TEXT,
    FOREIGN KEY (show_id) REFERENCES shows(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_new_episodes_show ON new_episodes(show_id, number);
";

/// Errors that can occur during catalog storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another show already uses the name
    #[error("A show named '{0}' already exists")]
    DuplicateName(String),

    /// Any other SQLite failure
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to the catalog database
///
/// The connection is closed when the store is dropped.
#[derive(Debug)]
pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Opens (and if needed creates) the catalog database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        debug!("Opening catalog at {}", path.as_ref().display());
        Self::init(Connection::open(path)?)
    }

    /// Opens a throwaway in-memory catalog
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Read access outside of a transaction
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Runs `f` inside a transaction
    ///
    /// The transaction is committed if `f` returns `Ok` and rolled back
    /// otherwise, so a failing command never leaves partial writes behind.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
        E: From<StoreError>,
    {
        let tx = self.conn.transaction().map_err(StoreError::from)?;
        let value = f(&tx)?;
        tx.commit().map_err(StoreError::from)?;
        Ok(value)
    }
}
