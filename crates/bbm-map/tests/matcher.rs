use bbm_map::{RangeStore, process, sort_for_display};
use bbm_model::{CellValue, ColumnSelection, Frame, Mode, Range, RangeId, Row};

fn frame_of(columns: &[&str], rows: &[&[&str]]) -> Frame {
    let mut frame = Frame::new(
        columns.iter().map(|c| (*c).to_string()).collect(),
        "specimens.csv",
    );
    for values in rows {
        let mut row = Row::new();
        for (col, val) in columns.iter().zip(values.iter()) {
            let cell = if val.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text((*val).to_string())
            };
            row.insert(*col, cell);
        }
        frame.push_row(row);
    }
    frame
}

fn tube_selection() -> ColumnSelection {
    ColumnSelection::tube_only("TubeNumber")
}

fn plate_selection() -> ColumnSelection {
    ColumnSelection {
        tube: "TubeNumber".to_string(),
        column: Some("Column".to_string()),
        row: Some("Row".to_string()),
    }
}

#[test]
fn rows_inside_the_rule_map_to_its_patient() {
    let frame = frame_of(
        &["TubeNumber"],
        &[
            &["1000"],
            &["1001"],
            &["1002"],
            &["1003"],
            &["1004"],
            &["1005"],
        ],
    );
    let mut store = RangeStore::new();
    store.add("1001", "1003", "P1", Mode::ByTubeNumber).unwrap();

    let processed = process(&frame, store.ranges(), Mode::ByTubeNumber, &tube_selection());
    let ids: Vec<Option<&str>> = processed.iter().map(|r| r.patient_id.as_deref()).collect();
    assert_eq!(
        ids,
        vec![None, Some("P1"), Some("P1"), Some("P1"), None, None]
    );
    assert!(processed.iter().all(|r| !r.excluded));
}

#[test]
fn empty_and_error_tubes_are_excluded_despite_covering_rules() {
    let frame = frame_of(
        &["TubeNumber"],
        &[&["1001"], &[" empty "], &["Error"], &[""]],
    );
    let mut store = RangeStore::new();
    // Rule boundaries that would match the literal tokens lexicographically.
    store.add("A", "z", "P1", Mode::ByTubeNumber).unwrap();
    store.add("1001", "1001", "P2", Mode::ByTubeNumber).unwrap();

    let processed = process(&frame, store.ranges(), Mode::ByTubeNumber, &tube_selection());
    assert!(!processed[0].excluded);
    assert_eq!(processed[0].patient_id.as_deref(), Some("P2"));
    for row in &processed[1..] {
        assert!(row.excluded);
        assert_eq!(row.patient_id, None);
    }
}

#[test]
fn first_rule_in_store_order_wins() {
    // Overlapping rules cannot enter through the store; build them directly
    // to assert the later rule is unreachable.
    let ranges = vec![
        Range {
            id: RangeId(0),
            start: "1001".to_string(),
            end: "1010".to_string(),
            patient_id: "P1".to_string(),
            mode: Mode::ByTubeNumber,
        },
        Range {
            id: RangeId(1),
            start: "1005".to_string(),
            end: "1010".to_string(),
            patient_id: "P2".to_string(),
            mode: Mode::ByTubeNumber,
        },
    ];
    let frame = frame_of(&["TubeNumber"], &[&["1007"]]);
    let processed = process(&frame, &ranges, Mode::ByTubeNumber, &tube_selection());
    assert_eq!(processed[0].patient_id.as_deref(), Some("P1"));
}

#[test]
fn adding_a_later_rule_does_not_disturb_earlier_matches() {
    let frame = frame_of(&["TubeNumber"], &[&["1002"], &["1020"]]);
    let mut store = RangeStore::new();
    store.add("1001", "1003", "P1", Mode::ByTubeNumber).unwrap();

    let before = process(&frame, store.ranges(), Mode::ByTubeNumber, &tube_selection());
    store.add("1019", "1021", "P2", Mode::ByTubeNumber).unwrap();
    let after = process(&frame, store.ranges(), Mode::ByTubeNumber, &tube_selection());

    assert_eq!(before[0], after[0]);
    assert_eq!(after[1].patient_id.as_deref(), Some("P2"));
}

#[test]
fn matching_uses_only_rules_of_the_active_mode() {
    let frame = frame_of(&["TubeNumber", "Column"], &[&["1001", "7"]]);
    let mut store = RangeStore::new();
    store.add("1001", "1001", "P1", Mode::ByTubeNumber).unwrap();
    store.add("5", "9", "P2", Mode::ByColumn).unwrap();

    let by_tube = process(&frame, store.ranges(), Mode::ByTubeNumber, &plate_selection());
    assert_eq!(by_tube[0].patient_id.as_deref(), Some("P1"));

    let by_column = process(&frame, store.ranges(), Mode::ByColumn, &plate_selection());
    assert_eq!(by_column[0].patient_id.as_deref(), Some("P2"));
}

#[test]
fn exclusion_stays_keyed_on_the_tube_column_in_plate_mode() {
    // The plate-column value is present and matchable, but the tube value
    // says EMPTY, so the row is excluded anyway.
    let frame = frame_of(&["TubeNumber", "Column"], &[&["EMPTY", "7"]]);
    let mut store = RangeStore::new();
    store.add("5", "9", "P1", Mode::ByColumn).unwrap();

    let processed = process(&frame, store.ranges(), Mode::ByColumn, &plate_selection());
    assert!(processed[0].excluded);
    assert_eq!(processed[0].patient_id, None);
}

#[test]
fn lexicographic_rules_match_plate_coordinates() {
    let frame = frame_of(
        &["TubeNumber", "Column"],
        &[&["1001", "A05"], &["1002", "B01"]],
    );
    let mut store = RangeStore::new();
    store.add("A01", "A12", "P1", Mode::ByColumn).unwrap();

    let processed = process(&frame, store.ranges(), Mode::ByColumn, &plate_selection());
    assert_eq!(processed[0].patient_id.as_deref(), Some("P1"));
    assert_eq!(processed[1].patient_id, None);
}

#[test]
fn reversed_range_matches_no_row() {
    let frame = frame_of(&["TubeNumber"], &[&["1001"], &["1002"], &["1003"]]);
    let mut store = RangeStore::new();
    store.add("1003", "1001", "P1", Mode::ByTubeNumber).unwrap();

    let processed = process(&frame, store.ranges(), Mode::ByTubeNumber, &tube_selection());
    assert!(processed.iter().all(|r| r.patient_id.is_none()));
}

#[test]
fn plate_mode_display_sorts_by_column_value_then_row_label() {
    let frame = frame_of(
        &["TubeNumber", "Column", "Row"],
        &[
            &["1001", "10", "B"],
            &["1002", "2", "A"],
            &["1003", "10", "A"],
            &["1004", "x", "A"],
        ],
    );
    let mut processed = process(&frame, &[], Mode::ByColumn, &plate_selection());
    sort_for_display(&mut processed, Mode::ByColumn, &plate_selection());

    let tubes: Vec<&str> = processed
        .iter()
        .map(|r| r.source.get("TubeNumber").unwrap())
        .collect();
    // Numeric column order (2 before 10), row label breaks the tie,
    // unparsable column values sort last.
    assert_eq!(tubes, vec!["1002", "1003", "1001", "1004"]);
}

#[test]
fn tube_mode_display_keeps_source_order() {
    let frame = frame_of(&["TubeNumber"], &[&["1005"], &["1001"], &["1003"]]);
    let mut processed = process(&frame, &[], Mode::ByTubeNumber, &tube_selection());
    sort_for_display(&mut processed, Mode::ByTubeNumber, &tube_selection());

    let tubes: Vec<&str> = processed
        .iter()
        .map(|r| r.source.get("TubeNumber").unwrap())
        .collect();
    assert_eq!(tubes, vec!["1005", "1001", "1003"]);
}
