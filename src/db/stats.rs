use crate::db::pool::DbPool;
use crate::db::schema;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNT PER ENTITY TABLE
    //
    println!("{}• Rows:{}", CYAN, RESET);
    for table in schema::table_names() {
        let count: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        println!("    {table:<20} {GREEN}{count}{RESET}");
    }

    //
    // 3) FOREIGN KEY ENFORCEMENT (per session)
    //
    let fk: i64 = pool
        .conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))?;
    println!(
        "{}• Foreign keys:{} {}",
        CYAN,
        RESET,
        if fk == 1 { "on" } else { "off" }
    );

    println!();
    Ok(())
}
