use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Write records as pretty JSON. `None` fields stay `null`.
pub fn write_json<T: Serialize>(path: &str, records: &[T]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(records).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
