//! Schema manager: creates the five entity tables.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so initialization is
//! idempotent. The statements run inside a single transaction: either the
//! whole schema lands or nothing does, and the error names the table whose
//! DDL failed.
//!
//! Foreign keys are declared here but *enforced* per session via
//! `PRAGMA foreign_keys` (see `DbPool::open`).

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA: &[(&str, &str)] = &[
    (
        "Companies",
        "CREATE TABLE IF NOT EXISTS Companies (
            companyID   INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            description TEXT,
            url         TEXT,
            hqCity      TEXT,
            hqState     TEXT
        );",
    ),
    (
        "Roles",
        "CREATE TABLE IF NOT EXISTS Roles (
            roleID         INTEGER PRIMARY KEY AUTOINCREMENT,
            companyID      INTEGER NOT NULL,
            name           TEXT NOT NULL,
            url            TEXT,
            description    TEXT,
            coverLetter    TEXT,
            applied        TEXT,
            appliedDate    TEXT,
            closedDate     TEXT,
            postedRangeMin INTEGER,
            postedRangeMax INTEGER,
            equity         BOOLEAN,
            workCity       TEXT,
            workState      TEXT,
            location       TEXT,
            status         TEXT,
            discovery      TEXT,
            referral       BOOLEAN,
            notes          TEXT,
            FOREIGN KEY (companyID) REFERENCES Companies(companyID)
        );",
    ),
    (
        "Interviews",
        r#"CREATE TABLE IF NOT EXISTS Interviews (
            interviewID INTEGER PRIMARY KEY AUTOINCREMENT,
            roleID      INTEGER NOT NULL,
            date        TEXT,
            "start"     TEXT,
            "end"       TEXT,
            notes       TEXT,
            "type"      TEXT,
            FOREIGN KEY (roleID) REFERENCES Roles(roleID)
        );"#,
    ),
    (
        "Contacts",
        "CREATE TABLE IF NOT EXISTS Contacts (
            contactID INTEGER PRIMARY KEY AUTOINCREMENT,
            companyID INTEGER NOT NULL,
            firstName TEXT,
            lastName  TEXT,
            role      TEXT,
            email     TEXT,
            phone     TEXT,
            linkedin  TEXT,
            notes     TEXT,
            FOREIGN KEY (companyID) REFERENCES Companies(companyID)
        );",
    ),
    (
        "InterviewsContacts",
        "CREATE TABLE IF NOT EXISTS InterviewsContacts (
            interviewContactId INTEGER PRIMARY KEY AUTOINCREMENT,
            interviewId        INTEGER NOT NULL,
            contactId          INTEGER NOT NULL,
            FOREIGN KEY (interviewId) REFERENCES Interviews(interviewID),
            FOREIGN KEY (contactId)   REFERENCES Contacts(contactID)
        );",
    ),
];

/// Internal audit log, not part of the entity schema.
const LOG_TABLE: &str = "CREATE TABLE IF NOT EXISTS log (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,
    operation TEXT NOT NULL,
    target    TEXT DEFAULT '',
    message   TEXT NOT NULL
);";

/// Initialize the database: apply all table definitions as one unit.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    for (table, ddl) in SCHEMA {
        tx.execute_batch(ddl).map_err(|e| AppError::Schema {
            table: (*table).to_string(),
            source: e,
        })?;
    }
    tx.execute_batch(LOG_TABLE).map_err(|e| AppError::Schema {
        table: "log".to_string(),
        source: e,
    })?;
    tx.commit()?;
    Ok(())
}

/// Check if the entity tables exist (used to guard commands before `init`).
pub fn is_initialized(conn: &Connection) -> AppResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='Companies'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Names of the entity tables, in creation order.
pub fn table_names() -> Vec<&'static str> {
    SCHEMA.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn creates_all_five_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        for table in table_names() {
            let n: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(n, 1, "missing table {table}");
        }
    }

    #[test]
    fn init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn.execute("INSERT INTO Companies (name) VALUES ('Acme')", [])
            .unwrap();
        init_db(&conn).unwrap();
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM Companies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn is_initialized_flips_after_init() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!is_initialized(&conn).unwrap());
        init_db(&conn).unwrap();
        assert!(is_initialized(&conn).unwrap());
    }
}
