//! Row classification and first-match rule resolution.

use std::cmp::Ordering;

use bbm_model::{ColumnSelection, Frame, Mode, ProcessedRow, Range, Row};

use crate::classify::{in_bounds, parse_number};

/// Tube values that mark a row as excluded, after trim + uppercase.
const EXCLUDED_TOKENS: [&str; 2] = ["EMPTY", "ERROR"];

/// Normalized tube-column value used for the exclusion decision.
///
/// Exclusion is always keyed on the tube/barcode column, even when matching
/// runs against the plate-column value.
fn exclusion_value(row: &Row, selection: &ColumnSelection) -> String {
    row.get(&selection.tube)
        .unwrap_or_default()
        .trim()
        .to_uppercase()
}

fn is_excluded(row: &Row, selection: &ColumnSelection) -> bool {
    let normalized = exclusion_value(row, selection);
    normalized.is_empty() || EXCLUDED_TOKENS.contains(&normalized.as_str())
}

/// The column the active mode matches against, when configured.
pub fn target_column<'a>(mode: Mode, selection: &'a ColumnSelection) -> Option<&'a str> {
    match mode {
        Mode::ByTubeNumber => Some(&selection.tube),
        Mode::ByColumn => selection.column.as_deref(),
    }
}

/// Derive the mapping outcome for every row of a frame.
///
/// Rules are scanned in store order, restricted to the active mode; the
/// first rule whose closed interval contains the row's target value wins,
/// so later overlapping rules (which the store rejects anyway) would be
/// unreachable. Excluded rows are never matched.
pub fn process(
    frame: &Frame,
    ranges: &[Range],
    mode: Mode,
    selection: &ColumnSelection,
) -> Vec<ProcessedRow> {
    let candidates: Vec<&Range> = ranges.iter().filter(|r| r.mode == mode).collect();
    let target = target_column(mode, selection);

    frame
        .rows
        .iter()
        .map(|row| {
            let excluded = is_excluded(row, selection);
            let patient_id = if excluded {
                None
            } else {
                target
                    .and_then(|col| row.get(col))
                    .and_then(|value| first_match(&candidates, value))
            };
            ProcessedRow {
                source: row.clone(),
                patient_id,
                excluded,
            }
        })
        .collect()
}

fn first_match(candidates: &[&Range], target: &str) -> Option<String> {
    candidates
        .iter()
        .find(|r| in_bounds(&r.start, &r.end, target))
        .map(|r| r.patient_id.clone())
}

/// Re-order processed rows for display.
///
/// A presentation concern layered on top of matching: `ByColumn` output is
/// sorted by numeric plate-column value ascending (unparsable values last)
/// with the plate-row label as tie-break; `ByTubeNumber` keeps source
/// order. The sort is stable, so fully tied rows also keep source order.
pub fn sort_for_display(
    processed: &mut [ProcessedRow],
    mode: Mode,
    selection: &ColumnSelection,
) {
    if mode != Mode::ByColumn {
        return;
    }
    let column = selection.column.clone();
    let row_label = selection.row.clone();
    processed.sort_by(|a, b| {
        let a_num = cell_number(a, column.as_deref());
        let b_num = cell_number(b, column.as_deref());
        let by_value = match (a_num, b_num) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value.then_with(|| {
            let a_label = row_label.as_deref().and_then(|c| a.source.get(c));
            let b_label = row_label.as_deref().and_then(|c| b.source.get(c));
            a_label.cmp(&b_label)
        })
    });
}

fn cell_number(row: &ProcessedRow, column: Option<&str>) -> Option<f64> {
    column
        .and_then(|c| row.source.get(c))
        .and_then(parse_number)
}
