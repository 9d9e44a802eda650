use crate::errors::{AppError, AppResult};
use csv::Writer;
use serde::Serialize;

/// Write records as CSV. `Option` fields become empty cells; that loses the
/// NULL/empty distinction, which is acceptable for an export format that
/// has no NULL of its own.
pub fn write_csv<T: Serialize>(path: &str, records: &[T]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for record in records {
        wtr.serialize(record)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
