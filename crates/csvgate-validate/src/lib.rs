//! The csvgate inference-and-validation engine.
//!
//! One run is a fixed sequence over an in-memory table: header analysis,
//! per-column type inference against the ordered pattern taxonomy, a
//! column-major cell re-scan against the inferred schemas, and a per-row
//! width re-scan when the loader flagged the input ragged. Findings are
//! appended in discovery order and never sorted or deduplicated.

pub mod check;
pub mod header;
pub mod infer;
pub mod taxonomy;
pub mod width;

pub use check::check_cells;
pub use header::{HeaderReport, analyze_header};
pub use infer::{ColumnSchema, InferenceResult, infer_schema};
pub use taxonomy::{NAME_PATTERN, PATTERNS, Taxonomy, TaxonomyRule};
pub use width::check_row_widths;

use tracing::debug;

use csvgate_ingest::RawTable;
use csvgate_model::ValidationOutcome;

/// Run the whole engine over one loaded table.
///
/// Finding order: header findings, the document-level timestamp finding if
/// any, schema findings in column-major scan order, then row-width findings
/// if the input was ragged. Deterministic for fixed input.
pub fn validate_table(table: &RawTable) -> ValidationOutcome {
    let taxonomy = Taxonomy::new();

    let header = analyze_header(&taxonomy, table.header());
    let mut findings = header.findings;

    let inference = infer_schema(&taxonomy, &header.columns, table.data_rows());
    findings.extend(inference.findings);
    findings.extend(check_cells(&inference.schemas, table.data_rows()));

    if table.ragged {
        debug!("input was ragged, re-scanning row widths");
        findings.extend(check_row_widths(table.column_count(), &table.rows));
    }

    ValidationOutcome {
        findings,
        types: inference.types,
    }
}
