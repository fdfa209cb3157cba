use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ReportError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load every row of a results CSV into typed records.
///
/// The file must have a header row; columns are matched by name, so their
/// order does not matter and extra columns are ignored.
///
/// * missing file        → [`ReportError::MissingInput`]
/// * unparseable row     → [`ReportError::Csv`] with the 1-based data row
/// * header but no rows  → [`ReportError::EmptyDataset`]
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<T>().enumerate() {
        let row = result.map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            row: i + 1,
            source,
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ReportError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
