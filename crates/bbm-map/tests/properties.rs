use proptest::prelude::*;

use bbm_map::{RangeStore, overlaps, process, unmapped_intervals};
use bbm_model::{CellValue, ColumnSelection, Frame, Mode, ProcessedRow, Range, RangeId, Row};

fn tube_frame(values: &[String]) -> Frame {
    let mut frame = Frame::new(vec!["TubeNumber".to_string()], "specimens.csv");
    for value in values {
        let mut row = Row::new();
        row.insert("TubeNumber", CellValue::Text(value.clone()));
        frame.push_row(row);
    }
    frame
}

fn selection() -> ColumnSelection {
    ColumnSelection::tube_only("TubeNumber")
}

fn numeric_range(id: u64, start: i32, end: i32) -> Range {
    Range {
        id: RangeId(id),
        start: start.to_string(),
        end: end.to_string(),
        patient_id: format!("P{id}"),
        mode: Mode::ByTubeNumber,
    }
}

proptest! {
    #[test]
    fn overlap_detection_is_symmetric_for_numeric_bounds(
        a_start in -5000i32..5000,
        a_end in -5000i32..5000,
        b_start in -5000i32..5000,
        b_end in -5000i32..5000,
    ) {
        let a = numeric_range(0, a_start, a_end);
        let b = numeric_range(1, b_start, b_end);
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn overlap_detection_is_symmetric_for_textual_bounds(
        a_start in "[A-H][0-9]{2}",
        a_end in "[A-H][0-9]{2}",
        b_start in "[A-H][0-9]{2}",
        b_end in "[A-H][0-9]{2}",
    ) {
        let mut a = numeric_range(0, 0, 0);
        a.start = a_start;
        a.end = a_end;
        let mut b = numeric_range(1, 0, 0);
        b.start = b_start;
        b.end = b_end;
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn every_value_inside_an_accepted_range_resolves_to_its_patient(
        start in 0i32..5000,
        span in 0i32..50,
        offset in 0i32..50,
    ) {
        let end = start + span;
        let value = start + offset.min(span);

        let mut store = RangeStore::new();
        store
            .add(start.to_string(), end.to_string(), "P1", Mode::ByTubeNumber)
            .unwrap();
        let frame = tube_frame(&[value.to_string()]);
        let processed = process(&frame, store.ranges(), Mode::ByTubeNumber, &selection());
        prop_assert_eq!(processed[0].patient_id.as_deref(), Some("P1"));
    }

    #[test]
    fn interval_merging_is_idempotent(values in prop::collection::vec(0u16..2000, 0..60)) {
        let raw: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let frame = tube_frame(&raw);
        let processed = process(&frame, &[], Mode::ByTubeNumber, &selection());
        let merged = unmapped_intervals(&processed, Mode::ByTubeNumber, &selection());

        // Expand the member points of the merged intervals and merge again.
        let mut points = Vec::new();
        for interval in &merged {
            let mut value = interval.start;
            while value <= interval.end {
                points.push(value.to_string());
                value += 1.0;
            }
        }
        let reframe = tube_frame(&points);
        let reprocessed = process(&reframe, &[], Mode::ByTubeNumber, &selection());
        let remerged = unmapped_intervals(&reprocessed, Mode::ByTubeNumber, &selection());
        prop_assert_eq!(remerged, merged);
    }

    #[test]
    fn snapshot_recomputation_is_deterministic(
        values in prop::collection::vec(0u16..500, 1..30),
    ) {
        let raw: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let frame = tube_frame(&raw);
        let mut store = RangeStore::new();
        store.add("100", "200", "P1", Mode::ByTubeNumber).unwrap();

        let first: Vec<ProcessedRow> =
            process(&frame, store.ranges(), Mode::ByTubeNumber, &selection());
        let second: Vec<ProcessedRow> =
            process(&frame, store.ranges(), Mode::ByTubeNumber, &selection());
        prop_assert_eq!(first, second);
    }
}
