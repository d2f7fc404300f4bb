//! Human-readable rendering of run results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bbm_cli::pipeline::MapReport;
use bbm_model::{ProcessedRow, Range, UnmappedInterval};

pub fn print_map_report(report: &MapReport) {
    println!("Dataset: {}", report.frame.source_name);
    println!("Mode: {}", report.mode);
    print_review_table(report);
    print_unmapped(&report.snapshot.unmapped);

    let unmapped_rows = report
        .snapshot
        .processed
        .iter()
        .filter(|r| r.is_unmapped())
        .count();
    if let Some(path) = &report.export_path {
        println!("Export: {}", path.display());
    } else if report.export_blocked {
        println!("Export blocked: {unmapped_rows} row(s) still unmapped");
    }
}

pub fn print_rules(ranges: &[Range]) {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Range"),
        header_cell("Patient"),
        header_cell("Mode"),
    ]);
    for range in ranges {
        table.add_row(vec![
            Cell::new(range.id),
            Cell::new(range.span()),
            Cell::new(&range.patient_id).fg(Color::Green),
            Cell::new(range.mode),
        ]);
    }
    println!("{table}");
}

fn print_review_table(report: &MapReport) {
    let tube = &report.selection.tube;
    let other_columns: Vec<&String> = report
        .frame
        .columns
        .iter()
        .filter(|c| c != &tube)
        .collect();

    let mut table = Table::new();
    apply_style(&mut table);
    let mut header = vec![header_cell("#"), header_cell(tube), header_cell("Patient ID")];
    header.extend(other_columns.iter().map(|c| header_cell(c.as_str())));
    table.set_header(header);

    for (idx, row) in report.snapshot.processed.iter().enumerate() {
        let mut cells = vec![
            Cell::new(idx + 1).set_alignment(CellAlignment::Right),
            Cell::new(row.source.get(tube).unwrap_or_default()),
            status_cell(row),
        ];
        cells.extend(
            other_columns
                .iter()
                .map(|c| Cell::new(row.source.get(c.as_str()).unwrap_or_default())),
        );
        table.add_row(cells);
    }
    println!("{table}");
}

fn print_unmapped(intervals: &[UnmappedInterval]) {
    if intervals.is_empty() {
        return;
    }
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![header_cell("Unmapped range"), header_cell("Tubes")]);
    for interval in intervals {
        let span = if interval.is_singleton() {
            format_value(interval.start)
        } else {
            format!(
                "{} → {}",
                format_value(interval.start),
                format_value(interval.end)
            )
        };
        table.add_row(vec![
            Cell::new(span).fg(Color::Yellow),
            Cell::new(format_value(interval.len())).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn status_cell(row: &ProcessedRow) -> Cell {
    if row.excluded {
        Cell::new("Excluded")
            .fg(Color::DarkGrey)
            .add_attribute(Attribute::Italic)
    } else {
        match &row.patient_id {
            Some(patient_id) => Cell::new(patient_id).fg(Color::Green),
            None => Cell::new("Unmapped")
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Render interval boundaries without a trailing `.0` for whole numbers.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
