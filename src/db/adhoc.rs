//! Ad-hoc statement executor: the trusted power-user escape hatch.
//!
//! A statement is classified by a lexical check only: a trimmed,
//! case-insensitive `select` prefix means "read query", everything else is
//! executed for effect. No validation or sanitization happens on purpose.
//! Any execution error is folded into `AppError::Query` so callers can
//! print it and move on; nothing here ever panics.

use crate::errors::{AppError, AppResult};
use crate::utils::table::ResultSet;
use rusqlite::Connection;
use rusqlite::types::ValueRef;

/// What an ad-hoc statement produced.
#[derive(Debug)]
pub enum Outcome {
    /// A read query: columns plus rows, ready for the renderer.
    Rows(ResultSet),
    /// A write statement: number of rows affected.
    Write(usize),
}

/// Lexical classification; deliberately just a prefix check.
pub fn is_read_query(sql: &str) -> bool {
    sql.trim().to_lowercase().starts_with("select")
}

/// Execute a free-form statement against the given session.
pub fn execute(conn: &Connection, sql: &str) -> AppResult<Outcome> {
    if is_read_query(sql) {
        select_result_set(conn, sql)
            .map(Outcome::Rows)
            .map_err(|e| AppError::Query(e.to_string()))
    } else {
        conn.execute(sql, [])
            .map(Outcome::Write)
            .map_err(|e| AppError::Query(e.to_string()))
    }
}

/// Run a row-producing statement and collect a generic result set.
/// NULL cells stay `None` so the renderer can show its literal.
pub fn select_result_set(conn: &Connection, sql: &str) -> AppResult<ResultSet> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let ncols = columns.len();

    let mut set = ResultSet::new(columns);
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(ncols);
        for i in 0..ncols {
            cells.push(value_to_text(row.get_ref(i)?));
        }
        set.add_row(cells);
    }
    Ok(set)
}

fn value_to_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(format!("<blob {} bytes>", b.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_db;
    use rusqlite::Connection;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert!(is_read_query("SELECT 1"));
        assert!(is_read_query("  select name FROM Companies"));
        assert!(is_read_query("\tSeLeCt 1"));
        assert!(!is_read_query("DELETE FROM Companies"));
        assert!(!is_read_query("update Roles set name='x'"));
    }

    #[test]
    fn select_produces_rows() {
        let conn = test_conn();
        conn.execute("INSERT INTO Companies (name) VALUES ('Acme')", [])
            .unwrap();
        match execute(&conn, "SELECT name FROM Companies").unwrap() {
            Outcome::Rows(set) => {
                assert_eq!(set.columns, vec!["name"]);
                assert_eq!(set.rows, vec![vec![Some("Acme".to_string())]]);
            }
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn write_reports_affected_rows() {
        let conn = test_conn();
        conn.execute("INSERT INTO Companies (name) VALUES ('Acme')", [])
            .unwrap();
        match execute(&conn, "DELETE FROM Companies WHERE companyID=1").unwrap() {
            Outcome::Write(n) => assert_eq!(n, 1),
            other => panic!("expected write, got {other:?}"),
        }
        let left: i64 = conn
            .query_row("SELECT COUNT(*) FROM Companies", [], |r| r.get(0))
            .unwrap();
        assert_eq!(left, 0);
    }

    #[test]
    fn garbage_reports_named_failure() {
        let conn = test_conn();
        match execute(&conn, "garbage ;;") {
            Err(AppError::Query(_)) => {}
            other => panic!("expected Query error, got {other:?}"),
        }
    }

    #[test]
    fn null_cells_survive_as_none() {
        let conn = test_conn();
        conn.execute("INSERT INTO Companies (name, url) VALUES ('Acme', NULL)", [])
            .unwrap();
        let set = select_result_set(&conn, "SELECT name, url FROM Companies").unwrap();
        assert_eq!(set.rows[0][1], None);
    }
}
