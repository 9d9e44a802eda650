//! Company repository.

use crate::db::adhoc::select_result_set;
use crate::errors::{AppError, AppResult};
use crate::models::Company;
use crate::utils::table::ResultSet;
use rusqlite::{Connection, Row, params};

pub fn map_row(row: &Row) -> rusqlite::Result<Company> {
    Ok(Company {
        company_id: row.get("companyID")?,
        name: row.get("name")?,
        description: row.get("description")?,
        url: row.get("url")?,
        hq_city: row.get("hqCity")?,
        hq_state: row.get("hqState")?,
    })
}

/// Insert a company, returning it with the store-assigned key.
pub fn insert(conn: &Connection, company: &Company) -> AppResult<Company> {
    if company.name.trim().is_empty() {
        return Err(AppError::MalformedInput(
            "company name is required".to_string(),
        ));
    }

    conn.execute(
        "INSERT INTO Companies (name, description, url, hqCity, hqState)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            company.name,
            company.description,
            company.url,
            company.hq_city,
            company.hq_state,
        ],
    )
    .map_err(AppError::from_store)?;

    let mut created = company.clone();
    created.company_id = conn.last_insert_rowid();
    Ok(created)
}

/// All companies, store-default order. Empty table gives an empty vec.
pub fn list(conn: &Connection) -> AppResult<Vec<Company>> {
    let mut stmt = conn.prepare(
        "SELECT companyID, name, description, url, hqCity, hqState FROM Companies",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Option<Company>> {
    use rusqlite::OptionalExtension;
    let company = conn
        .query_row(
            "SELECT companyID, name, description, url, hqCity, hqState
             FROM Companies WHERE companyID = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(company)
}

/// Overwrite all non-key fields. Returns rows affected; 0 means the key
/// does not exist (silent no-op, callers decide whether that matters).
pub fn update(conn: &Connection, company: &Company) -> AppResult<usize> {
    if company.name.trim().is_empty() {
        return Err(AppError::MalformedInput(
            "company name is required".to_string(),
        ));
    }

    let affected = conn
        .execute(
            "UPDATE Companies
             SET name = ?1, description = ?2, url = ?3, hqCity = ?4, hqState = ?5
             WHERE companyID = ?6",
            params![
                company.name,
                company.description,
                company.url,
                company.hq_city,
                company.hq_state,
                company.company_id,
            ],
        )
        .map_err(AppError::from_store)?;
    Ok(affected)
}

/// Delete by key. Returns rows affected; 0 means the key was absent.
/// No cascade: with foreign keys enforced, deleting a company that still
/// has roles or contacts fails with a constraint violation.
pub fn delete(conn: &Connection, id: i64) -> AppResult<usize> {
    conn.execute("DELETE FROM Companies WHERE companyID = ?1", [id])
        .map_err(AppError::from_store)
}

/// Display listing used by the menu and `company list`.
pub fn listing(conn: &Connection) -> AppResult<ResultSet> {
    select_result_set(
        conn,
        "SELECT companyID, name, description, url, hqCity, hqState FROM Companies",
    )
}
