use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use dbc_cli::pipeline::RoundTrip;
use dbc_model::{OperationFamily, OperationKind};
use dbc_validate::{Location, ValidationReport};

pub fn print_tags() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tag"),
        header_cell("Family"),
        header_cell("Operation"),
    ]);
    apply_table_style(&mut table);
    let mut previous: Option<OperationFamily> = None;
    for kind in OperationKind::ALL {
        let family = kind.family();
        let family_cell = if previous == Some(family) {
            dim_cell("")
        } else {
            Cell::new(family.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        previous = Some(family);
        table.add_row(vec![Cell::new(kind.tag()), family_cell, Cell::new(kind.label())]);
    }
    println!("{table}");
    println!("{} operations", OperationKind::ALL.len());
}

pub fn print_validation(source: &str, report: &ValidationReport) {
    if report.is_valid() {
        println!("{source}: no issues");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Where"),
        header_cell("Id"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for issue in report.issues() {
        let id_cell = match &issue.location {
            Location::Operation { id, .. } => Cell::new(id),
            _ => dim_cell("-"),
        };
        table.add_row(vec![
            location_cell(&issue.location),
            id_cell,
            Cell::new(&issue.message).fg(Color::Red),
        ]);
    }
    println!("{source}:");
    println!("{table}");
    println!(
        "{} issue(s), {} operation(s) affected",
        report.len(),
        report.operations_with_issues()
    );
}

pub fn print_roundtrip(source: &str, result: &RoundTrip) {
    let status = if result.is_canonical() {
        Cell::new("canonical")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("differs")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Script"),
        header_cell("Checks"),
        header_cell("Operations"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(source),
        Cell::new(result.checks),
        Cell::new(result.operations),
        status,
    ]);
    println!("{table}");
    if let Some(difference) = &result.difference {
        println!("first difference at line {}:", difference.line);
        println!("  file:     {}", difference.original.as_deref().unwrap_or("<end of file>"));
        println!("  rendered: {}", difference.rendered.as_deref().unwrap_or("<end of file>"));
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(60)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn location_cell(location: &Location) -> Cell {
    match location {
        Location::Operation { .. } => Cell::new(location).fg(Color::Blue),
        _ => Cell::new(location)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
