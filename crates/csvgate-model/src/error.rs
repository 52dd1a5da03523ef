use std::path::PathBuf;

use thiserror::Error;

/// Process-level failures. Validation findings are data, not errors.
#[derive(Debug, Error)]
pub enum CsvGateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv parse error: {0}")]
    Csv(String),
    #[error("input file has no rows: {}", .0.display())]
    EmptyInput(PathBuf),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CsvGateError>;
