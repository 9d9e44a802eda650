use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::backup::backup_database;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let written = backup_database(&cfg.database, file, *compress)?;
        success(format!("Backup written to {written}"));
    }
    Ok(())
}
