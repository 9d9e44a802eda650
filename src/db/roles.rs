//! Role repository.

use crate::db::adhoc::select_result_set;
use crate::errors::{AppError, AppResult};
use crate::models::Role;
use crate::utils::table::ResultSet;
use rusqlite::{Connection, Row, params};

const COLUMNS: &str = "roleID, companyID, name, url, description, coverLetter, \
     applied, appliedDate, closedDate, postedRangeMin, postedRangeMax, equity, \
     workCity, workState, location, status, discovery, referral, notes";

pub fn map_row(row: &Row) -> rusqlite::Result<Role> {
    Ok(Role {
        role_id: row.get("roleID")?,
        company_id: row.get("companyID")?,
        name: row.get("name")?,
        url: row.get("url")?,
        description: row.get("description")?,
        cover_letter: row.get("coverLetter")?,
        applied: row.get("applied")?,
        applied_date: row.get("appliedDate")?,
        closed_date: row.get("closedDate")?,
        posted_range_min: row.get("postedRangeMin")?,
        posted_range_max: row.get("postedRangeMax")?,
        equity: row.get("equity")?,
        work_city: row.get("workCity")?,
        work_state: row.get("workState")?,
        location: row.get("location")?,
        status: row.get("status")?,
        discovery: row.get("discovery")?,
        referral: row.get("referral")?,
        notes: row.get("notes")?,
    })
}

fn validate(role: &Role) -> AppResult<()> {
    if role.name.trim().is_empty() {
        return Err(AppError::MalformedInput("role name is required".to_string()));
    }
    if role.company_id <= 0 {
        return Err(AppError::MalformedInput(
            "role requires a valid companyID".to_string(),
        ));
    }
    Ok(())
}

/// Insert a role, returning it with the store-assigned key.
/// With foreign keys enforced, a dangling companyID fails as Constraint.
pub fn insert(conn: &Connection, role: &Role) -> AppResult<Role> {
    validate(role)?;

    conn.execute(
        "INSERT INTO Roles (companyID, name, url, description, coverLetter,
             applied, appliedDate, closedDate, postedRangeMin, postedRangeMax,
             equity, workCity, workState, location, status, discovery, referral, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
        params![
            role.company_id,
            role.name,
            role.url,
            role.description,
            role.cover_letter,
            role.applied,
            role.applied_date,
            role.closed_date,
            role.posted_range_min,
            role.posted_range_max,
            role.equity,
            role.work_city,
            role.work_state,
            role.location,
            role.status,
            role.discovery,
            role.referral,
            role.notes,
        ],
    )
    .map_err(AppError::from_store)?;

    let mut created = role.clone();
    created.role_id = conn.last_insert_rowid();
    Ok(created)
}

pub fn list(conn: &Connection) -> AppResult<Vec<Role>> {
    let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM Roles"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> AppResult<Option<Role>> {
    use rusqlite::OptionalExtension;
    let role = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM Roles WHERE roleID = ?1"),
            [id],
            map_row,
        )
        .optional()?;
    Ok(role)
}

/// Overwrite all non-key fields. 0 affected rows means the key is absent.
pub fn update(conn: &Connection, role: &Role) -> AppResult<usize> {
    validate(role)?;

    let affected = conn
        .execute(
            "UPDATE Roles
             SET companyID = ?1, name = ?2, url = ?3, description = ?4,
                 coverLetter = ?5, applied = ?6, appliedDate = ?7, closedDate = ?8,
                 postedRangeMin = ?9, postedRangeMax = ?10, equity = ?11,
                 workCity = ?12, workState = ?13, location = ?14, status = ?15,
                 discovery = ?16, referral = ?17, notes = ?18
             WHERE roleID = ?19",
            params![
                role.company_id,
                role.name,
                role.url,
                role.description,
                role.cover_letter,
                role.applied,
                role.applied_date,
                role.closed_date,
                role.posted_range_min,
                role.posted_range_max,
                role.equity,
                role.work_city,
                role.work_state,
                role.location,
                role.status,
                role.discovery,
                role.referral,
                role.notes,
                role.role_id,
            ],
        )
        .map_err(AppError::from_store)?;
    Ok(affected)
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<usize> {
    conn.execute("DELETE FROM Roles WHERE roleID = ?1", [id])
        .map_err(AppError::from_store)
}

/// Display listing joined with the company name, ordered by primary key.
pub fn listing(conn: &Connection) -> AppResult<ResultSet> {
    select_result_set(
        conn,
        "SELECT r.roleID, r.name, r.description, r.status,
                r.postedRangeMin, r.postedRangeMax, c.name AS companyName
         FROM Roles r
         JOIN Companies c ON r.companyID = c.companyID
         ORDER BY r.roleID",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{companies, schema::init_db};
    use crate::models::Company;
    use rusqlite::Connection;

    fn conn_with_company() -> (Connection, i64) {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        let company = companies::insert(&conn, &Company::new("Acme")).unwrap();
        (conn, company.company_id)
    }

    #[test]
    fn create_then_list_round_trips() {
        let (conn, company_id) = conn_with_company();
        let mut r = Role::new(company_id, "Engineer");
        r.posted_range_min = Some(150_000);
        r.equity = Some(true);
        let created = insert(&conn, &r).unwrap();
        assert!(created.role_id > 0);

        let all = list(&conn).unwrap();
        assert_eq!(all, vec![created]);
    }

    #[test]
    fn dangling_company_id_is_rejected_when_enforced() {
        let (conn, _) = conn_with_company();
        match insert(&conn, &Role::new(999, "Engineer")) {
            Err(AppError::Constraint(_)) => {}
            other => panic!("expected Constraint, got {other:?}"),
        }
    }

    #[test]
    fn optional_integers_and_bools_round_trip_null() {
        let (conn, company_id) = conn_with_company();
        let created = insert(&conn, &Role::new(company_id, "Engineer")).unwrap();
        let fetched = get(&conn, created.role_id).unwrap().unwrap();
        assert_eq!(fetched.posted_range_min, None);
        assert_eq!(fetched.posted_range_max, None);
        assert_eq!(fetched.equity, None);
        assert_eq!(fetched.referral, None);
    }

    #[test]
    fn update_overwrites_all_fields() {
        let (conn, company_id) = conn_with_company();
        let mut created = insert(&conn, &Role::new(company_id, "Engineer")).unwrap();
        created.status = Some("applied".to_string());
        created.applied_date = Some("2026-08-01".to_string());
        created.url = None;
        assert_eq!(update(&conn, &created).unwrap(), 1);

        let fetched = get(&conn, created.role_id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn deleting_parent_company_fails_while_roles_exist() {
        let (conn, company_id) = conn_with_company();
        insert(&conn, &Role::new(company_id, "Engineer")).unwrap();
        match companies::delete(&conn, company_id) {
            Err(AppError::Constraint(_)) => {}
            other => panic!("expected Constraint, got {other:?}"),
        }
    }

    #[test]
    fn listing_joins_company_name() {
        let (conn, company_id) = conn_with_company();
        insert(&conn, &Role::new(company_id, "Engineer")).unwrap();
        let set = listing(&conn).unwrap();
        assert!(set.columns.contains(&"companyName".to_string()));
        assert_eq!(set.rows.len(), 1);
        assert!(set.rows[0].contains(&Some("Acme".to_string())));
    }
}
