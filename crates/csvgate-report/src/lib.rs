//! JSON report writers.
//!
//! One run produces two artifacts next to each other, named after the input
//! base name: `<base>_datatypes.json` (inferred types, header order) and
//! `<base>_errors.json` (findings, discovery order). Payloads carry no
//! volatile content, so repeated runs over unchanged input write identical
//! bytes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use csvgate_model::ValidationOutcome;

/// Paths of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub types: PathBuf,
    pub errors: PathBuf,
}

/// Derive the two report paths for an input file.
pub fn report_paths(output_dir: &Path, input: &Path) -> ReportPaths {
    let base = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    ReportPaths {
        types: output_dir.join(format!("{base}_datatypes.json")),
        errors: output_dir.join(format!("{base}_errors.json")),
    }
}

/// Write both reports, creating the output directory if needed.
pub fn write_reports(
    output_dir: &Path,
    input: &Path,
    outcome: &ValidationOutcome,
) -> Result<ReportPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;
    let paths = report_paths(output_dir, input);

    let types = serde_json::to_string_pretty(&outcome.types)?;
    std::fs::write(&paths.types, format!("{types}\n"))
        .with_context(|| format!("write type report: {}", paths.types.display()))?;

    let errors = serde_json::to_string_pretty(&outcome.findings)?;
    std::fs::write(&paths.errors, format!("{errors}\n"))
        .with_context(|| format!("write error report: {}", paths.errors.display()))?;

    info!(
        types = %paths.types.display(),
        errors = %paths.errors.display(),
        findings = outcome.finding_count(),
        "wrote reports"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvgate_model::{ErrorKind, Finding, Location, TypeRecord};

    fn outcome() -> ValidationOutcome {
        ValidationOutcome {
            findings: vec![Finding::new(
                ErrorKind::NoTimeStampColumn,
                Location::document(),
                "could not find any timestamp column",
            )],
            types: vec![TypeRecord {
                column: "id".to_string(),
                type_label: "integer".to_string(),
                pattern: r"^\d+$".to_string(),
            }],
        }
    }

    #[test]
    fn paths_use_input_base_name() {
        let paths = report_paths(Path::new("/out"), Path::new("/data/drop.csv"));
        assert_eq!(paths.types, Path::new("/out/drop_datatypes.json"));
        assert_eq!(paths.errors, Path::new("/out/drop_errors.json"));
    }

    #[test]
    fn writes_parseable_reports() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_reports(dir.path(), Path::new("drop.csv"), &outcome()).unwrap();

        let types_text = std::fs::read_to_string(&paths.types).unwrap();
        let types: serde_json::Value = serde_json::from_str(&types_text).unwrap();
        assert_eq!(types[0]["Column"], "id");
        assert_eq!(types[0]["type"], "integer");

        let errors_text = std::fs::read_to_string(&paths.errors).unwrap();
        let errors: serde_json::Value = serde_json::from_str(&errors_text).unwrap();
        assert_eq!(errors[0]["Type"], "Type3:NoTimeStampColumnError");
        assert_eq!(errors[0]["Location"], serde_json::json!({}));
        assert!(errors_text.ends_with('\n'));
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = outcome();
        let paths = write_reports(dir.path(), Path::new("drop.csv"), &outcome).unwrap();
        let first = std::fs::read(&paths.errors).unwrap();
        write_reports(dir.path(), Path::new("drop.csv"), &outcome).unwrap();
        let second = std::fs::read(&paths.errors).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports/run1");
        let paths = write_reports(&nested, Path::new("drop.csv"), &outcome()).unwrap();
        assert!(paths.types.exists());
        assert!(paths.errors.exists());
    }
}
