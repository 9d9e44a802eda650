use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning(format!("Config file not found: {}", path.display()));
            }
        }

        if *check {
            let cfg = Config::check()?;
            if Path::new(&cfg.database).exists() {
                success(format!("Config OK, database: {}", cfg.database));
            } else {
                warning(format!(
                    "Config parses but database does not exist: {}",
                    cfg.database
                ));
            }
        }
    }
    Ok(())
}
