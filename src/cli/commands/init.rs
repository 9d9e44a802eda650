use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing jobtrack…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::open(&cfg)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", &cfg.database));

    // non-blocking audit entry
    if let Err(e) = log::oplog(
        &pool.conn,
        "init",
        &cfg.database,
        "Database initialized",
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    Ok(())
}
