//! Header analysis: canonical column names, duplicate repair, and
//! non-string name detection.

use tracing::{debug, error};

use csvgate_model::{ErrorKind, Finding, Location};

use crate::taxonomy::Taxonomy;

/// Result of one header scan: the unique working identifiers used as schema
/// keys downstream, plus any findings. Always the same length as the input.
#[derive(Debug, Clone)]
pub struct HeaderReport {
    pub columns: Vec<String>,
    pub findings: Vec<Finding>,
}

/// Analyze the first row's cells.
///
/// Blank cells receive a `Col<i>` placeholder. A name already accepted
/// earlier in the scan is reported as a duplicate and repaired to
/// `<name>-Col<i>` so downstream schema keys stay unambiguous; the original
/// anomaly is still reported. Name-pattern violations are reported and do
/// not block processing. Returns corrected identifiers and findings instead
/// of mutating shared state.
pub fn analyze_header(taxonomy: &Taxonomy, cells: &[String]) -> HeaderReport {
    let mut accepted: Vec<String> = Vec::with_capacity(cells.len());
    let mut columns: Vec<String> = Vec::with_capacity(cells.len());
    let mut findings = Vec::new();

    for (index, cell) in cells.iter().enumerate() {
        let trimmed = cell.trim();
        let fieldname = if trimmed.is_empty() {
            format!("Col{index}")
        } else {
            trimmed.to_string()
        };

        if accepted.contains(&fieldname) {
            findings.push(Finding::new(
                ErrorKind::DuplicateHeader,
                Location::column(fieldname.clone()),
                "Duplicate value",
            ));
            columns.push(format!("{fieldname}-Col{index}"));
        } else {
            accepted.push(fieldname.clone());
            columns.push(fieldname.clone());
        }

        debug!(index, fieldname = %fieldname, "header field");
        if !taxonomy.is_valid_name(&fieldname) {
            error!(fieldname = %fieldname, "found non string header");
            findings.push(Finding::new(
                ErrorKind::NonStringInHeader,
                Location::column(fieldname),
                "column header is not of string type",
            ));
        }
    }

    debug!(?columns, "working column identifiers");
    HeaderReport { columns, findings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn accepts_clean_header() {
        let taxonomy = Taxonomy::new();
        let report = analyze_header(&taxonomy, &cells(&["id", "name", "created at"]));
        assert_eq!(report.columns, ["id", "name", "created at"]);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn repairs_duplicate_and_reports_it() {
        let taxonomy = Taxonomy::new();
        let report = analyze_header(&taxonomy, &cells(&["A", "B", "A"]));
        assert_eq!(report.columns, ["A", "B", "A-Col2"]);
        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.kind, ErrorKind::DuplicateHeader);
        assert_eq!(finding.location, Location::column("A"));
    }

    #[test]
    fn blank_cell_gets_placeholder() {
        let taxonomy = Taxonomy::new();
        let report = analyze_header(&taxonomy, &cells(&["id", "  ", "name"]));
        assert_eq!(report.columns, ["id", "Col1", "name"]);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn non_string_name_is_reported_but_kept() {
        let taxonomy = Taxonomy::new();
        let report = analyze_header(&taxonomy, &cells(&["id", "#count"]));
        assert_eq!(report.columns, ["id", "#count"]);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].kind, ErrorKind::NonStringInHeader);
        assert_eq!(report.findings[0].location, Location::column("#count"));
    }

    #[test]
    fn duplicate_placeholder_names_stay_unique() {
        let taxonomy = Taxonomy::new();
        // A literal "Col1" colliding with the placeholder for a blank cell.
        let report = analyze_header(&taxonomy, &cells(&["Col1", "", "x"]));
        assert_eq!(report.columns, ["Col1", "Col1-Col1", "x"]);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].kind, ErrorKind::DuplicateHeader);
    }

    #[test]
    fn identifier_list_matches_input_length() {
        let taxonomy = Taxonomy::new();
        let input = cells(&["a", "a", "a", "", "#", "a"]);
        let report = analyze_header(&taxonomy, &input);
        assert_eq!(report.columns.len(), input.len());
        let mut unique = report.columns.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), input.len());
    }
}
