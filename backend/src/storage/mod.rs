//! Shared SQLite handle.
//!
//! `Db` is cloned into every actix worker as `web::Data`. The single
//! connection sits behind an `Arc<tokio::sync::Mutex>`, so writes are
//! serialized; requests for the same record are last-write-wins.

use std::path::Path;
use std::sync::Arc;

use log::info;
use rusqlite::Connection;
use tokio::sync::{Mutex, MutexGuard};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS formats (
    id       TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL UNIQUE,
    format   TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS submissions (
    id              TEXT PRIMARY KEY,
    owner_id        TEXT NOT NULL,
    organisation_id TEXT NOT NULL,
    data            TEXT NOT NULL,
    name            TEXT,
    description     TEXT,
    UNIQUE (organisation_id, owner_id)
);
CREATE TABLE IF NOT EXISTS policy_versions (
    id        TEXT PRIMARY KEY,
    policy_id TEXT NOT NULL,
    version   INTEGER NOT NULL,
    status    TEXT NOT NULL,
    document  TEXT NOT NULL,
    UNIQUE (policy_id, version)
);
";

#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        info!("Opening database at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}
