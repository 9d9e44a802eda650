pub mod backup;
pub mod company;
pub mod config;
pub mod contact;
pub mod db;
pub mod export;
pub mod init;
pub mod interview;
pub mod link;
pub mod log;
pub mod menu;
pub mod query;
pub mod role;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema;
use crate::errors::{AppError, AppResult};

/// Open a session and refuse to run against an uninitialized database.
pub(crate) fn open_session(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::open(cfg)?;
    if !schema::is_initialized(&pool.conn)? {
        return Err(AppError::Other(
            "Database not initialized. Run 'jobtrack init' first.".to_string(),
        ));
    }
    Ok(pool)
}
