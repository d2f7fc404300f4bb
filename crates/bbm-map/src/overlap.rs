//! Overlap detection between a candidate rule and stored rules.

use std::cmp::Ordering;

use bbm_model::Range;

use crate::classify::{Comparison, classify, parse_number};

/// True when two rules of the same mode cover a common value.
///
/// Rules of different modes never conflict. The four boundary values are
/// classified collectively: the check is numeric only when all four parse,
/// otherwise the whole comparison is lexicographic. Overlap holds iff
/// `candidate.start <= existing.end && candidate.end >= existing.start`
/// under the chosen ordering. Symmetric in its arguments.
pub fn overlaps(candidate: &Range, existing: &Range) -> bool {
    if candidate.mode != existing.mode {
        return false;
    }
    let comparison = classify(&[
        &candidate.start,
        &candidate.end,
        &existing.start,
        &existing.end,
    ]);
    match comparison {
        Comparison::Numeric => {
            let cand_start = parse_number(&candidate.start).unwrap_or_default();
            let cand_end = parse_number(&candidate.end).unwrap_or_default();
            let exist_start = parse_number(&existing.start).unwrap_or_default();
            let exist_end = parse_number(&existing.end).unwrap_or_default();
            cand_start <= exist_end && cand_end >= exist_start
        }
        Comparison::Lexicographic => {
            candidate.start.cmp(&existing.end) != Ordering::Greater
                && candidate.end.cmp(&existing.start) != Ordering::Less
        }
    }
}
