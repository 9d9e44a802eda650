//! Interview-contact link repository (the many-to-many join table).

use crate::db::adhoc::select_result_set;
use crate::errors::{AppError, AppResult};
use crate::models::InterviewContact;
use crate::utils::table::ResultSet;
use rusqlite::{Connection, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<InterviewContact> {
    Ok(InterviewContact {
        interview_contact_id: row.get("interviewContactId")?,
        interview_id: row.get("interviewId")?,
        contact_id: row.get("contactId")?,
    })
}

fn validate(link: &InterviewContact) -> AppResult<()> {
    if link.interview_id <= 0 || link.contact_id <= 0 {
        return Err(AppError::MalformedInput(
            "link requires a valid interviewId and contactId".to_string(),
        ));
    }
    Ok(())
}

pub fn insert(conn: &Connection, link: &InterviewContact) -> AppResult<InterviewContact> {
    validate(link)?;

    conn.execute(
        "INSERT INTO InterviewsContacts (interviewId, contactId) VALUES (?1, ?2)",
        params![link.interview_id, link.contact_id],
    )
    .map_err(AppError::from_store)?;

    let mut created = link.clone();
    created.interview_contact_id = conn.last_insert_rowid();
    Ok(created)
}

pub fn list(conn: &Connection) -> AppResult<Vec<InterviewContact>> {
    let mut stmt = conn
        .prepare("SELECT interviewContactId, interviewId, contactId FROM InterviewsContacts")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update(conn: &Connection, link: &InterviewContact) -> AppResult<usize> {
    validate(link)?;

    let affected = conn
        .execute(
            "UPDATE InterviewsContacts
             SET interviewId = ?1, contactId = ?2
             WHERE interviewContactId = ?3",
            params![link.interview_id, link.contact_id, link.interview_contact_id],
        )
        .map_err(AppError::from_store)?;
    Ok(affected)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<usize> {
    conn.execute(
        "DELETE FROM InterviewsContacts WHERE interviewContactId = ?1",
        [id],
    )
    .map_err(AppError::from_store)
}

/// Display listing resolving both sides of the join.
pub fn listing(conn: &Connection) -> AppResult<ResultSet> {
    select_result_set(
        conn,
        "SELECT ic.interviewContactId, ic.interviewId, i.date AS interviewDate,
                con.firstName, con.lastName, c.name AS companyName
         FROM InterviewsContacts ic
         JOIN Interviews i ON ic.interviewId = i.interviewID
         JOIN Contacts con ON ic.contactId = con.contactID
         JOIN Companies c ON con.companyID = c.companyID
         ORDER BY ic.interviewContactId",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{companies, contacts, interviews, roles, schema::init_db};
    use crate::models::{Company, Contact, Interview, Role};
    use rusqlite::Connection;

    fn full_chain() -> (Connection, i64, i64) {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        let company = companies::insert(&conn, &Company::new("Acme")).unwrap();
        let role = roles::insert(&conn, &Role::new(company.company_id, "Engineer")).unwrap();
        let interview = interviews::insert(&conn, &Interview::new(role.role_id)).unwrap();
        let contact = contacts::insert(&conn, &Contact::new(company.company_id)).unwrap();
        (conn, interview.interview_id, contact.contact_id)
    }

    #[test]
    fn link_round_trips() {
        let (conn, interview_id, contact_id) = full_chain();
        let created = insert(&conn, &InterviewContact::new(interview_id, contact_id)).unwrap();
        assert!(created.interview_contact_id > 0);
        assert_eq!(list(&conn).unwrap(), vec![created]);
    }

    #[test]
    fn dangling_sides_are_rejected_when_enforced() {
        let (conn, interview_id, _) = full_chain();
        match insert(&conn, &InterviewContact::new(interview_id, 999)) {
            Err(AppError::Constraint(_)) => {}
            other => panic!("expected Constraint, got {other:?}"),
        }
    }

    #[test]
    fn delete_is_noop_on_missing_key() {
        let (conn, _, _) = full_chain();
        assert_eq!(delete(&conn, 42).unwrap(), 0);
    }
}
