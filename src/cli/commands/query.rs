use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::adhoc::{self, Outcome};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};
use crate::utils::render;

/// The power-user escape hatch: run a raw statement. Execution failures are
/// reported as text, never propagated as a crash.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Query { sql } = cmd {
        let pool = open_session(cfg)?;

        match adhoc::execute(&pool.conn, sql) {
            Ok(Outcome::Rows(set)) => {
                print!("{}", render(&set, &cfg.separator_char));
            }
            Ok(Outcome::Write(affected)) => {
                success(format!("Statement executed ({affected} row(s) affected)"));
            }
            Err(AppError::Query(msg)) => {
                error(format!("Query execution failed: {msg}"));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
