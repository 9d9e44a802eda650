use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, EntityKind};
use crate::config::Config;
use crate::db::{companies, contacts, interviews, links, roles};
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json};
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        entity,
        format,
        file,
        force,
    } = cmd
    {
        let pool = open_session(cfg)?;
        ensure_writable(Path::new(file), *force)?;

        let written = match (entity, format) {
            (EntityKind::Company, ExportFormat::Csv) => {
                let records = companies::list(&pool.conn)?;
                csv::write_csv(file, &records)?;
                records.len()
            }
            (EntityKind::Company, ExportFormat::Json) => {
                let records = companies::list(&pool.conn)?;
                json::write_json(file, &records)?;
                records.len()
            }
            (EntityKind::Role, ExportFormat::Csv) => {
                let records = roles::list(&pool.conn)?;
                csv::write_csv(file, &records)?;
                records.len()
            }
            (EntityKind::Role, ExportFormat::Json) => {
                let records = roles::list(&pool.conn)?;
                json::write_json(file, &records)?;
                records.len()
            }
            (EntityKind::Interview, ExportFormat::Csv) => {
                let records = interviews::list(&pool.conn)?;
                csv::write_csv(file, &records)?;
                records.len()
            }
            (EntityKind::Interview, ExportFormat::Json) => {
                let records = interviews::list(&pool.conn)?;
                json::write_json(file, &records)?;
                records.len()
            }
            (EntityKind::Contact, ExportFormat::Csv) => {
                let records = contacts::list(&pool.conn)?;
                csv::write_csv(file, &records)?;
                records.len()
            }
            (EntityKind::Contact, ExportFormat::Json) => {
                let records = contacts::list(&pool.conn)?;
                json::write_json(file, &records)?;
                records.len()
            }
            (EntityKind::Link, ExportFormat::Csv) => {
                let records = links::list(&pool.conn)?;
                csv::write_csv(file, &records)?;
                records.len()
            }
            (EntityKind::Link, ExportFormat::Json) => {
                let records = links::list(&pool.conn)?;
                json::write_json(file, &records)?;
                records.len()
            }
        };

        success(format!("Exported {written} record(s) to {file}"));
    }
    Ok(())
}
