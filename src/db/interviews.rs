//! Interview repository.
//!
//! `start`, `end` and `type` are SQL keywords, so they stay quoted in every
//! statement here.

use crate::db::adhoc::select_result_set;
use crate::errors::{AppError, AppResult};
use crate::models::Interview;
use crate::utils::table::ResultSet;
use rusqlite::{Connection, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<Interview> {
    Ok(Interview {
        interview_id: row.get("interviewID")?,
        role_id: row.get("roleID")?,
        date: row.get("date")?,
        start: row.get("start")?,
        end: row.get("end")?,
        notes: row.get("notes")?,
        kind: row.get("type")?,
    })
}

fn validate(interview: &Interview) -> AppResult<()> {
    if interview.role_id <= 0 {
        return Err(AppError::MalformedInput(
            "interview requires a valid roleID".to_string(),
        ));
    }
    Ok(())
}

pub fn insert(conn: &Connection, interview: &Interview) -> AppResult<Interview> {
    validate(interview)?;

    conn.execute(
        r#"INSERT INTO Interviews (roleID, date, "start", "end", notes, "type")
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        params![
            interview.role_id,
            interview.date,
            interview.start,
            interview.end,
            interview.notes,
            interview.kind,
        ],
    )
    .map_err(AppError::from_store)?;

    let mut created = interview.clone();
    created.interview_id = conn.last_insert_rowid();
    Ok(created)
}

pub fn list(conn: &Connection) -> AppResult<Vec<Interview>> {
    let mut stmt = conn.prepare(
        r#"SELECT interviewID, roleID, date, "start", "end", notes, "type" FROM Interviews"#,
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Option<Interview>> {
    use rusqlite::OptionalExtension;
    let interview = conn
        .query_row(
            r#"SELECT interviewID, roleID, date, "start", "end", notes, "type"
               FROM Interviews WHERE interviewID = ?1"#,
            [id],
            map_row,
        )
        .optional()?;
    Ok(interview)
}

pub fn update(conn: &Connection, interview: &Interview) -> AppResult<usize> {
    validate(interview)?;

    let affected = conn
        .execute(
            r#"UPDATE Interviews
               SET roleID = ?1, date = ?2, "start" = ?3, "end" = ?4,
                   notes = ?5, "type" = ?6
               WHERE interviewID = ?7"#,
            params![
                interview.role_id,
                interview.date,
                interview.start,
                interview.end,
                interview.notes,
                interview.kind,
                interview.interview_id,
            ],
        )
        .map_err(AppError::from_store)?;
    Ok(affected)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<usize> {
    conn.execute("DELETE FROM Interviews WHERE interviewID = ?1", [id])
        .map_err(AppError::from_store)
}

/// Display listing joined with role and company names, ordered by key.
pub fn listing(conn: &Connection) -> AppResult<ResultSet> {
    select_result_set(
        conn,
        r#"SELECT i.interviewID, i.date, i."start", i."end", i.notes, i."type",
                  r.name AS roleName, c.name AS companyName
           FROM Interviews i
           JOIN Roles r ON i.roleID = r.roleID
           JOIN Companies c ON r.companyID = c.companyID
           ORDER BY i.interviewID"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{companies, roles, schema::init_db};
    use crate::models::{Company, Role};
    use rusqlite::Connection;

    fn conn_with_role() -> (Connection, i64) {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        let company = companies::insert(&conn, &Company::new("Acme")).unwrap();
        let role = roles::insert(&conn, &Role::new(company.company_id, "Engineer")).unwrap();
        (conn, role.role_id)
    }

    #[test]
    fn create_then_list_round_trips() {
        let (conn, role_id) = conn_with_role();
        let mut i = Interview::new(role_id);
        i.date = Some("2026-09-01".to_string());
        i.start = Some("10:00".to_string());
        i.kind = Some("phone".to_string());
        let created = insert(&conn, &i).unwrap();

        assert_eq!(list(&conn).unwrap(), vec![created]);
    }

    #[test]
    fn dangling_role_id_is_rejected_when_enforced() {
        let (conn, _) = conn_with_role();
        match insert(&conn, &Interview::new(999)) {
            Err(AppError::Constraint(_)) => {}
            other => panic!("expected Constraint, got {other:?}"),
        }
    }

    #[test]
    fn unset_times_stay_null() {
        let (conn, role_id) = conn_with_role();
        let created = insert(&conn, &Interview::new(role_id)).unwrap();
        let fetched = get(&conn, created.interview_id).unwrap().unwrap();
        assert_eq!(fetched.start, None);
        assert_eq!(fetched.end, None);
        assert_eq!(fetched.kind, None);
    }

    #[test]
    fn listing_joins_role_and_company() {
        let (conn, role_id) = conn_with_role();
        insert(&conn, &Interview::new(role_id)).unwrap();
        let set = listing(&conn).unwrap();
        assert!(set.columns.contains(&"roleName".to_string()));
        assert!(set.columns.contains(&"companyName".to_string()));
        assert_eq!(set.rows.len(), 1);
    }
}
