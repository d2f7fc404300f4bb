//! Header-based column auto-detection.
//!
//! Column names vary between lab systems, so the defaults are guessed from
//! header substrings and the user can always override them.

use bbm_model::{ColumnSelection, Frame};

/// Substrings (lowercased) that mark a probable tube/barcode column.
const TUBE_HINTS: [&str; 3] = ["tubenumber", "id", "vial"];

/// Guess the active columns for a freshly loaded frame.
///
/// The tube column falls back to the first header when nothing matches;
/// plate coordinates stay unset unless a header looks like one.
pub fn detect_columns(frame: &Frame) -> ColumnSelection {
    let tube = find_by_hints(frame, &TUBE_HINTS)
        .or_else(|| frame.columns.first().cloned())
        .unwrap_or_default();
    let column = find_by_hints(frame, &["column", "col"]).filter(|c| *c != tube);
    let row = find_by_hints(frame, &["row"]).filter(|c| *c != tube);
    let selection = ColumnSelection { tube, column, row };
    tracing::debug!(
        tube = %selection.tube,
        column = selection.column.as_deref().unwrap_or("-"),
        row = selection.row.as_deref().unwrap_or("-"),
        "auto-detected columns"
    );
    selection
}

fn find_by_hints(frame: &Frame, hints: &[&str]) -> Option<String> {
    frame
        .columns
        .iter()
        .find(|name| {
            let lower = name.to_lowercase();
            hints.iter().any(|hint| lower.contains(hint))
        })
        .cloned()
}
