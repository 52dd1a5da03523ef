use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvgate_model::{ErrorKind, Finding};
use csvgate_validate::Taxonomy;

use crate::types::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    println!("Input: {}", result.input.display());
    println!(
        "Rows: {} ({} data), columns: {}{}",
        result.rows,
        result.rows.saturating_sub(1),
        result.columns,
        if result.ragged { ", ragged" } else { "" }
    );
    if let Some(reports) = &result.reports {
        println!("Type report: {}", reports.types.display());
        println!("Error report: {}", reports.errors.display());
    }

    print_types_table(result);
    print_findings_table(&result.outcome.findings);

    let count = result.outcome.finding_count();
    if count == 0 {
        println!("No findings.");
    } else {
        println!("{count} finding(s).");
    }
}

fn print_types_table(result: &ValidateResult) {
    if result.outcome.types.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Pattern"),
    ]);
    apply_table_style(&mut table);
    for record in &result.outcome.types {
        table.add_row(vec![
            Cell::new(&record.column),
            Cell::new(&record.type_label).fg(Color::Blue),
            dim_cell(&record.pattern),
        ]);
    }
    println!("{table}");
}

fn print_findings_table(findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Info"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for finding in findings {
        table.add_row(vec![
            kind_cell(finding.kind),
            match finding.location.row {
                Some(row) => Cell::new(row),
                None => dim_cell("-"),
            },
            match &finding.location.column {
                Some(column) => Cell::new(column),
                None => dim_cell("-"),
            },
            Cell::new(&finding.info),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

pub fn print_patterns(taxonomy: &Taxonomy) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Priority"),
        header_cell("Type"),
        header_cell("Pattern"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, rule) in taxonomy.rules().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(rule.label).fg(Color::Blue),
            Cell::new(rule.pattern),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: ErrorKind) -> Cell {
    let color = match kind {
        ErrorKind::NoTimeStampColumn => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(kind.as_str()).fg(color)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
