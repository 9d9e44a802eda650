//! Unified application error type.
//! All modules (db, cli, export, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Schema creation failed on table {table}: {source}")]
    Schema {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Backup / export errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Fold a rusqlite error into the taxonomy: SQLITE_CONSTRAINT failures
    /// become `Constraint`, everything else stays a raw `Db` error.
    pub fn from_store(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::Constraint(
                    msg.clone()
                        .unwrap_or_else(|| "constraint failed".to_string()),
                )
            }
            _ => AppError::Db(err),
        }
    }
}
