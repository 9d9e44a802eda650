//! SQLite session wrapper (lightweight for CLI usage).
//!
//! Each logical session owns one connection; concurrent callers open their
//! own sessions against the same file and rely on SQLite's locking. The
//! busy timeout makes concurrent writers queue instead of failing.

use crate::config::Config;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }

    /// Open a session honoring the configured foreign-key policy.
    /// Enforcement is per-connection in SQLite; it is opt-in here, applied
    /// at open so no operation runs without it.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = Self::new(&cfg.database)?;
        if cfg.enforce_foreign_keys {
            pool.enable_foreign_keys()?;
        }
        Ok(pool)
    }

    pub fn enable_foreign_keys(&self) -> AppResult<()> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }
}
