use std::path::PathBuf;

use csvgate_model::ValidationOutcome;
use csvgate_report::ReportPaths;

/// Everything one validation run produced, for the terminal summary.
pub struct ValidateResult {
    pub input: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub ragged: bool,
    pub outcome: ValidationOutcome,
    /// None on a dry run.
    pub reports: Option<ReportPaths>,
}
