//! Per-row column-count re-scan for ragged inputs.

use csvgate_model::{ErrorKind, Finding, Location};

/// Report every raw row (header included) whose cell count differs from the
/// expected column count. Row indices are raw file positions, zero-based.
/// Callers invoke this only after the loader has flagged the input ragged,
/// so well-formed files never pay for the extra pass.
pub fn check_row_widths(expected: usize, rows: &[Vec<String>]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let actual = row.len();
        if actual != expected {
            findings.push(Finding::new(
                ErrorKind::ColumnCount,
                Location::row(index),
                format!(
                    "Actual column count {actual} is not matching with column count of table {expected}"
                ),
            ));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(widths: &[usize]) -> Vec<Vec<String>> {
        widths
            .iter()
            .map(|w| vec![String::from("x"); *w])
            .collect()
    }

    #[test]
    fn uniform_rows_yield_nothing() {
        assert!(check_row_widths(3, &rows(&[3, 3, 3])).is_empty());
    }

    #[test]
    fn each_mismatched_row_is_reported_once() {
        let findings = check_row_widths(2, &rows(&[2, 3, 2, 1]));
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].location, Location::row(1));
        assert!(findings[0].info.contains("Actual column count 3"));
        assert!(findings[0].info.contains("column count of table 2"));
        assert_eq!(findings[1].location, Location::row(3));
    }

    #[test]
    fn kind_is_column_count() {
        let findings = check_row_widths(2, &rows(&[1]));
        assert_eq!(findings[0].kind, ErrorKind::ColumnCount);
    }
}
