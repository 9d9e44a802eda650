//! Database backup: plain file copy, optionally gzip-compressed.

use crate::errors::{AppError, AppResult};
use crate::utils::path::is_absolute;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io;
use std::path::Path;

/// Copy the database file to `dest`. With `compress` the destination gets a
/// `.gz` suffix unless it already carries one.
pub fn backup_database(db_path: &str, dest: &str, compress: bool) -> AppResult<String> {
    if !Path::new(db_path).exists() {
        return Err(AppError::Backup(format!("Database not found: {db_path}")));
    }
    if !is_absolute(dest) {
        return Err(AppError::Backup(
            "Destination must be an absolute path".to_string(),
        ));
    }

    if compress {
        let dest = if dest.ends_with(".gz") {
            dest.to_string()
        } else {
            format!("{dest}.gz")
        };
        let mut input = File::open(db_path)?;
        let output = File::create(&dest)?;
        let mut encoder = GzEncoder::new(output, Compression::default());
        io::copy(&mut input, &mut encoder)?;
        encoder.finish()?;
        Ok(dest)
    } else {
        std::fs::copy(db_path, dest)?;
        Ok(dest.to_string())
    }
}
