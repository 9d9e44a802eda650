use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = open_session(cfg)?;
        let lines = load_log(&pool.conn)?;

        if lines.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        for (date, operation, message) in lines {
            println!("{date} [{operation}] {message}");
        }
    }
    Ok(())
}
