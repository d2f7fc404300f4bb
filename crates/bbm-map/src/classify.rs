//! Per-comparison choice between numeric and lexicographic ordering.
//!
//! Boundaries and target values are raw user strings; whether a given
//! comparison treats them as numbers is decided independently every time,
//! so one rule may compare numerically against one row and
//! lexicographically against another.

use std::cmp::Ordering;

/// How a set of values is ordered for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Numeric,
    Lexicographic,
}

/// Parse a value as a finite number, tolerating surrounding whitespace.
///
/// Sign and fractional part are accepted; `inf`/`nan` spellings are not.
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Classify a group of values that participate in one comparison.
///
/// Numeric only when every value parses; a single unparsable value forces
/// the lexicographic path for the whole group. Never fails.
pub fn classify(values: &[&str]) -> Comparison {
    if values.iter().all(|v| parse_number(v).is_some()) {
        Comparison::Numeric
    } else {
        Comparison::Lexicographic
    }
}

/// Order two values under an already-chosen comparison mode.
///
/// Callers must only pass [`Comparison::Numeric`] for values known to
/// parse; lexicographic ordering compares the raw strings as given,
/// case-sensitive and untrimmed.
pub fn compare(comparison: Comparison, a: &str, b: &str) -> Ordering {
    match comparison {
        Comparison::Numeric => {
            let a = parse_number(a).unwrap_or_default();
            let b = parse_number(b).unwrap_or_default();
            a.total_cmp(&b)
        }
        Comparison::Lexicographic => a.cmp(b),
    }
}

/// True when `target` lies within the closed interval `[start, end]` under
/// the comparison mode chosen for the three values collectively.
///
/// A reversed interval (`start > end`) is not an error; it simply contains
/// nothing.
pub fn in_bounds(start: &str, end: &str, target: &str) -> bool {
    let comparison = classify(&[start, end, target]);
    compare(comparison, target, start) != Ordering::Less
        && compare(comparison, target, end) != Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_requires_every_value_to_parse() {
        assert_eq!(classify(&["1001", "1050", "1010"]), Comparison::Numeric);
        assert_eq!(classify(&[" 1001 ", "-2", "3.5"]), Comparison::Numeric);
        assert_eq!(
            classify(&["1001", "1050", "A01"]),
            Comparison::Lexicographic
        );
        assert_eq!(classify(&[""]), Comparison::Lexicographic);
        assert_eq!(classify(&["inf"]), Comparison::Lexicographic);
        assert_eq!(classify(&["NaN"]), Comparison::Lexicographic);
    }

    #[test]
    fn numeric_bounds_are_inclusive() {
        assert!(in_bounds("1001", "1003", "1001"));
        assert!(in_bounds("1001", "1003", "1003"));
        assert!(!in_bounds("1001", "1003", "1000"));
        assert!(!in_bounds("1001", "1003", "1004"));
    }

    #[test]
    fn numeric_comparison_avoids_string_ordering_trap() {
        // Lexicographically "10" < "2"; numerically it is not.
        assert!(in_bounds("2", "10", "9"));
        assert!(!in_bounds("2", "10", "11"));
    }

    #[test]
    fn lexicographic_fallback_compares_raw_strings() {
        assert!(in_bounds("A01", "A12", "A05"));
        assert!(!in_bounds("A01", "A12", "B01"));
        // Case-sensitive: 'a' sorts after 'Z'.
        assert!(!in_bounds("A01", "Z99", "a01"));
    }

    #[test]
    fn one_unparsable_boundary_forces_lexicographic() {
        // "1x" breaks the numeric path, so "9" vs "10" falls back to
        // string order where "10" < "9".
        assert!(!in_bounds("10", "1x", "9"));
    }

    #[test]
    fn reversed_interval_contains_nothing() {
        assert!(!in_bounds("1003", "1001", "1002"));
        assert!(!in_bounds("B", "A", "A"));
    }
}
