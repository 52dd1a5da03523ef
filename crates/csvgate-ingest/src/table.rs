use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use csvgate_model::{CsvGateError, Result};

/// Raw rows as read from disk. Row 0 is the header. Cells are kept verbatim;
/// trimming and blank/null policy belong to the validation engine.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
    /// True when some row's cell count differs from row 0's.
    pub ragged: bool,
}

impl RawTable {
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        if self.rows.len() > 1 { &self.rows[1..] } else { &[] }
    }

    pub fn column_count(&self) -> usize {
        self.header().len()
    }
}

/// Read every record of a comma-delimited, double-quoted file.
///
/// The reader runs in flexible mode so rows of unexpected width are surfaced
/// rather than rejected; the caller decides what a width mismatch means. A
/// file yielding zero records is a process error, not a finding, because
/// there is no header to validate against.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| CsvGateError::Csv(format!("read {}: {error}", path.display())))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|error| CsvGateError::Csv(format!("read {}: {error}", path.display())))?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    if rows.is_empty() {
        return Err(CsvGateError::EmptyInput(path.to_path_buf()));
    }

    let expected = rows[0].len();
    let ragged = rows.iter().any(|row| row.len() != expected);
    if ragged {
        debug!(
            path = %path.display(),
            expected, "ragged input detected, width re-scan will run"
        );
    }
    debug!(path = %path.display(), rows = rows.len(), columns = expected, "loaded table");
    Ok(RawTable { rows, ragged })
}
