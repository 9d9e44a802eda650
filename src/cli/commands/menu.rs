//! Interactive menu: one operation at a time against one session.
//!
//! The loop is generic over its input/output streams so it can be driven by
//! tests with a cursor instead of stdin.

use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::adhoc::{self, Outcome};
use crate::db::pool::DbPool;
use crate::db::{companies, contacts, interviews, roles};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::render;
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Menu = cmd {
        let pool = open_session(cfg)?;
        messages::header("jobtrack");
        let stdin = io::stdin();
        run_menu(&pool, cfg, &mut stdin.lock(), &mut io::stdout())?;
    }
    Ok(())
}

pub fn run_menu<R, W>(pool: &DbPool, cfg: &Config, input: &mut R, out: &mut W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out)?;
        writeln!(out, "Select an option:")?;
        writeln!(out, "1. List companies")?;
        writeln!(out, "2. List roles with company name")?;
        writeln!(out, "3. List interviews with role and company")?;
        writeln!(out, "4. List contacts with company")?;
        writeln!(out, "5. Run custom SQL query")?;
        writeln!(out, "6. Exit")?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(choice) = read_line(input)? else {
            // EOF behaves like exit
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let set = companies::listing(&pool.conn)?;
                write!(out, "\n{}", render(&set, &cfg.separator_char))?;
            }
            "2" => {
                let set = roles::listing(&pool.conn)?;
                write!(out, "\n{}", render(&set, &cfg.separator_char))?;
            }
            "3" => {
                let set = interviews::listing(&pool.conn)?;
                write!(out, "\n{}", render(&set, &cfg.separator_char))?;
            }
            "4" => {
                let set = contacts::listing(&pool.conn)?;
                write!(out, "\n{}", render(&set, &cfg.separator_char))?;
            }
            "5" => {
                write!(out, "Enter SQL query:\n> ")?;
                out.flush()?;
                let Some(sql) = read_line(input)? else {
                    return Ok(());
                };
                match adhoc::execute(&pool.conn, &sql) {
                    Ok(Outcome::Rows(set)) => {
                        write!(out, "\n{}", render(&set, &cfg.separator_char))?;
                    }
                    Ok(Outcome::Write(affected)) => {
                        writeln!(out, "Query executed ({affected} row(s) affected).")?;
                    }
                    Err(e) => {
                        writeln!(out, "Execution error: {e}")?;
                    }
                }
            }
            "6" => {
                writeln!(out, "Exiting.")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "Invalid choice")?;
            }
        }
    }
}

/// One trimmed line, or None on EOF.
fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_db;
    use std::io::Cursor;

    fn test_pool() -> DbPool {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn.execute("INSERT INTO Companies (name) VALUES ('Acme')", [])
            .unwrap();
        DbPool { conn }
    }

    fn drive(input: &str) -> String {
        let pool = test_pool();
        let cfg = Config::default();
        let mut out = Vec::new();
        run_menu(&pool, &cfg, &mut Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_companies_and_exits() {
        let out = drive("1\n6\n");
        assert!(out.contains("Acme"));
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn invalid_choice_keeps_looping() {
        let out = drive("99\n6\n");
        assert!(out.contains("Invalid choice"));
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn custom_query_renders_a_table() {
        let out = drive("5\nSELECT name FROM Companies\n6\n");
        assert!(out.contains("name"));
        assert!(out.contains("Acme"));
    }

    #[test]
    fn custom_write_reports_affected_rows() {
        let out = drive("5\nDELETE FROM Companies WHERE companyID=1\n6\n");
        assert!(out.contains("1 row(s) affected"));
    }

    #[test]
    fn bad_sql_reports_error_without_crashing() {
        let out = drive("5\ngarbage ;;\n6\n");
        assert!(out.contains("Execution error:"));
        assert!(out.contains("Exiting."));
    }

    #[test]
    fn eof_exits_cleanly() {
        let out = drive("");
        assert!(out.contains("Select an option:"));
    }
}
