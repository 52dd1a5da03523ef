use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use csvgate_ingest::read_raw_table;
use csvgate_report::write_reports;
use csvgate_validate::{Taxonomy, validate_table};

use crate::cli::ValidateArgs;
use crate::summary::print_patterns;
use crate::types::ValidateResult;

/// Load, validate, and (unless dry-running) write the two reports.
///
/// Findings are the run's output, not a failure: this returns `Err` only for
/// process errors such as an unreadable or empty input file.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidateResult> {
    let table = read_raw_table(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    info!(
        input = %args.file.display(),
        rows = table.rows.len(),
        columns = table.column_count(),
        ragged = table.ragged,
        "validating"
    );

    let outcome = validate_table(&table);

    let reports = if args.dry_run {
        None
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.file));
        Some(write_reports(&output_dir, &args.file, &outcome)?)
    };

    Ok(ValidateResult {
        input: args.file.clone(),
        rows: table.rows.len(),
        columns: table.column_count(),
        ragged: table.ragged,
        outcome,
        reports,
    })
}

/// Reports land next to the input unless an output dir was given.
fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Print the ordered taxonomy.
pub fn run_patterns() {
    let taxonomy = Taxonomy::new();
    print_patterns(&taxonomy);
}
