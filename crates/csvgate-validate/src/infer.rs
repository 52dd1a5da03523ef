//! Per-column type inference from the first non-blank sample.

use tracing::{debug, error};

use csvgate_model::{ErrorKind, Finding, Location, TypeRecord};

use crate::taxonomy::{Taxonomy, TaxonomyRule};

/// A column bound to its matched taxonomy rule. The not-null rule applies to
/// every column that holds a schema.
#[derive(Debug)]
pub struct ColumnSchema<'a> {
    pub name: String,
    pub index: usize,
    pub rule: &'a TaxonomyRule,
}

/// Output of the inference pass: one schema and type record per sampled
/// column in header order, plus the document-level timestamp finding when no
/// column inferred as timestamp.
#[derive(Debug)]
pub struct InferenceResult<'a> {
    pub schemas: Vec<ColumnSchema<'a>>,
    pub types: Vec<TypeRecord>,
    pub findings: Vec<Finding>,
}

/// Infer a schema for each column from its data rows.
///
/// The sample is the first cell, in row order, that is present and non-blank
/// after trimming; the untrimmed text is classified. Columns with no sample
/// produce no schema rule and no timestamp credit.
pub fn infer_schema<'a>(
    taxonomy: &'a Taxonomy,
    columns: &[String],
    rows: &[Vec<String>],
) -> InferenceResult<'a> {
    let mut schemas = Vec::new();
    let mut types = Vec::new();
    let mut found_timestamp = false;

    for (index, name) in columns.iter().enumerate() {
        let sample = rows
            .iter()
            .filter_map(|row| row.get(index))
            .find(|cell| !cell.trim().is_empty());
        let Some(sample) = sample else {
            error!(index, column = %name, "couldn't find a valid sample for column");
            continue;
        };
        debug!(index, column = %name, sample = %sample, "found first valid value");

        let rule = taxonomy.classify(sample);
        debug!(pattern = rule.pattern, label = rule.label, "matched taxonomy rule");
        if rule.label == "timestamp" {
            found_timestamp = true;
        }
        schemas.push(ColumnSchema {
            name: name.clone(),
            index,
            rule,
        });
        types.push(TypeRecord {
            column: name.clone(),
            type_label: rule.label.to_string(),
            pattern: rule.pattern.to_string(),
        });
    }

    let mut findings = Vec::new();
    if !found_timestamp {
        error!("no timestamp column found");
        findings.push(Finding::new(
            ErrorKind::NoTimeStampColumn,
            Location::document(),
            "could not find any timestamp column",
        ));
    }

    InferenceResult {
        schemas,
        types,
        findings,
    }
}
