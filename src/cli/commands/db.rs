use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool: Option<DbPool> = None;

        fn get_pool<'a>(pool: &'a mut Option<DbPool>, cfg: &Config) -> AppResult<&'a mut DbPool> {
            if pool.is_none() {
                *pool = Some(open_session(cfg)?);
            }
            Ok(pool.as_mut().unwrap())
        }

        //
        // 1) INFO
        //
        if *info {
            let pool = get_pool(&mut pool, cfg)?;
            stats::print_db_info(pool, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            let pool = get_pool(&mut pool, cfg)?;

            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed: {}{}\n", RED, integrity, RESET);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            let pool = get_pool(&mut pool, cfg)?;

            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Database optimized.{}\n", GREEN, RESET);
        }
    }
    Ok(())
}
