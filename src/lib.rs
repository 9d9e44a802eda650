//! jobtrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Menu => cli::commands::menu::handle(&cli.command, cfg),
        Commands::Company { .. } => cli::commands::company::handle(&cli.command, cfg),
        Commands::Role { .. } => cli::commands::role::handle(&cli.command, cfg),
        Commands::Interview { .. } => cli::commands::interview::handle(&cli.command, cfg),
        Commands::Contact { .. } => cli::commands::contact::handle(&cli.command, cfg),
        Commands::Link { .. } => cli::commands::link::handle(&cli.command, cfg),
        Commands::Query { .. } => cli::commands::query::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply a database override from the command line, if any; relative
    // paths resolve under the config dir, same as `init`
    if let Some(custom_db) = &cli.db {
        let p = utils::path::expand_tilde(custom_db);
        let p = if p.is_absolute() {
            p
        } else {
            Config::config_dir().join(p)
        };
        cfg.database = p.to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
