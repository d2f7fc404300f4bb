//! Contiguous-interval summary of values no rule covers yet.

use bbm_model::{ColumnSelection, Mode, ProcessedRow, UnmappedInterval};

use crate::classify::parse_number;
use crate::matcher::target_column;

/// Merge the target values of non-excluded, unmatched rows into maximal
/// closed runs of consecutive values.
///
/// Values that do not parse as numbers cannot participate in interval
/// merging and are dropped; duplicates contribute a single point. The
/// result is disjoint, non-adjacent (a gap of at least 2 separates
/// intervals), and sorted ascending by start.
pub fn unmapped_intervals(
    processed: &[ProcessedRow],
    mode: Mode,
    selection: &ColumnSelection,
) -> Vec<UnmappedInterval> {
    let Some(column) = target_column(mode, selection) else {
        return Vec::new();
    };

    let mut values: Vec<f64> = processed
        .iter()
        .filter(|row| row.is_unmapped())
        .filter_map(|row| row.source.get(column))
        .filter_map(parse_number)
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup();

    let mut intervals = Vec::new();
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return intervals;
    };
    let mut start = first;
    let mut end = first;
    for value in iter {
        if value == end + 1.0 {
            end = value;
        } else {
            intervals.push(UnmappedInterval { start, end });
            start = value;
            end = value;
        }
    }
    intervals.push(UnmappedInterval { start, end });
    intervals
}
