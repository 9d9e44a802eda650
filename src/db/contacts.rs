//! Contact repository.

use crate::db::adhoc::select_result_set;
use crate::errors::{AppError, AppResult};
use crate::models::Contact;
use crate::utils::table::ResultSet;
use rusqlite::{Connection, Row, params};

const COLUMNS: &str =
    "contactID, companyID, firstName, lastName, role, email, phone, linkedin, notes";

pub fn map_row(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        contact_id: row.get("contactID")?,
        company_id: row.get("companyID")?,
        first_name: row.get("firstName")?,
        last_name: row.get("lastName")?,
        role: row.get("role")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        linkedin: row.get("linkedin")?,
        notes: row.get("notes")?,
    })
}

fn validate(contact: &Contact) -> AppResult<()> {
    if contact.company_id <= 0 {
        return Err(AppError::MalformedInput(
            "contact requires a valid companyID".to_string(),
        ));
    }
    Ok(())
}

pub fn insert(conn: &Connection, contact: &Contact) -> AppResult<Contact> {
    validate(contact)?;

    conn.execute(
        "INSERT INTO Contacts (companyID, firstName, lastName, role, email, phone, linkedin, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            contact.company_id,
            contact.first_name,
            contact.last_name,
            contact.role,
            contact.email,
            contact.phone,
            contact.linkedin,
            contact.notes,
        ],
    )
    .map_err(AppError::from_store)?;

    let mut created = contact.clone();
    created.contact_id = conn.last_insert_rowid();
    Ok(created)
}

pub fn list(conn: &Connection) -> AppResult<Vec<Contact>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM Contacts"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Option<Contact>> {
    use rusqlite::OptionalExtension;
    let contact = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM Contacts WHERE contactID = ?1"),
            [id],
            map_row,
        )
        .optional()?;
    Ok(contact)
}

pub fn update(conn: &Connection, contact: &Contact) -> AppResult<usize> {
    validate(contact)?;

    let affected = conn
        .execute(
            "UPDATE Contacts
             SET companyID = ?1, firstName = ?2, lastName = ?3, role = ?4,
                 email = ?5, phone = ?6, linkedin = ?7, notes = ?8
             WHERE contactID = ?9",
            params![
                contact.company_id,
                contact.first_name,
                contact.last_name,
                contact.role,
                contact.email,
                contact.phone,
                contact.linkedin,
                contact.notes,
                contact.contact_id,
            ],
        )
        .map_err(AppError::from_store)?;
    Ok(affected)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<usize> {
    conn.execute("DELETE FROM Contacts WHERE contactID = ?1", [id])
        .map_err(AppError::from_store)
}

/// Display listing joined with the company name, ordered by primary key.
pub fn listing(conn: &Connection) -> AppResult<ResultSet> {
    select_result_set(
        conn,
        "SELECT con.contactID, con.firstName, con.lastName, con.role, con.email,
                con.phone, con.linkedin, con.notes, c.name AS companyName
         FROM Contacts con
         JOIN Companies c ON con.companyID = c.companyID
         ORDER BY con.contactID",
    )
}
