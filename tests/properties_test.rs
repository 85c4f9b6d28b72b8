use flight_status::{aggregate, filter_by_state, parse_records, FlightRecord, StateCode};
use proptest::prelude::*;

const STATES: [&str; 4] = ["FL", "CA", "TX", "XY"];

fn city() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}( [A-Z][a-z]{2,6})?"
}

fn status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Departed".to_string()),
        Just("Delayed".to_string()),
        Just("In Air".to_string()),
        Just("Scheduled".to_string()),
        Just("Cancelled".to_string()),
    ]
}

fn destination() -> impl Strategy<Value = String> {
    (city(), prop::sample::select(STATES.to_vec()), any::<bool>()).prop_map(
        |(city, state, with_state)| {
            if with_state {
                format!("{}, {}", city, state)
            } else {
                city
            }
        },
    )
}

fn flight_record() -> impl Strategy<Value = FlightRecord> {
    (destination(), status())
        .prop_map(|(destination, status)| FlightRecord::from_fields(&destination, &status).unwrap())
}

fn chunk_lines(destination: &str, status: &str) -> Vec<String> {
    vec![
        "ZZ Test Air".to_string(),
        "42".to_string(),
        "ZZ42".to_string(),
        destination.to_string(),
        status.to_string(),
        "8:00 AM".to_string(),
        "8:15 AM".to_string(),
        status.to_string(),
        "Term. B - B2".to_string(),
        status.to_string(),
    ]
}

proptest! {
    #[test]
    fn valid_chunks_yield_one_record_each(
        rows in prop::collection::vec((destination(), status()), 0..20)
    ) {
        let lines: Vec<String> = rows
            .iter()
            .flat_map(|(destination, status)| chunk_lines(destination, status))
            .collect();

        let report = parse_records(&lines);

        prop_assert_eq!(report.records.len(), lines.len() / 10);
        prop_assert_eq!(report.dropped_chunks, 0);
        for (record, (destination, status)) in report.records.iter().zip(&rows) {
            prop_assert_eq!(record.destination(), destination.as_str());
            prop_assert_eq!(record.status(), status.as_str());
        }
    }

    #[test]
    fn invalid_chunks_are_dropped_independently(
        rows in prop::collection::vec((destination(), status(), 0u8..4), 1..15)
    ) {
        // 0: valid, 1: short destination, 2: short status, 3: empty destination
        let mut lines = Vec::new();
        let mut expected = Vec::new();
        for (destination, status, kind) in &rows {
            match kind {
                0 => {
                    lines.extend(chunk_lines(destination, status));
                    expected.push(destination.clone());
                }
                1 => lines.extend(chunk_lines("NY", status)),
                2 => lines.extend(chunk_lines(destination, "X")),
                _ => lines.extend(chunk_lines("", status)),
            }
        }

        let report = parse_records(&lines);
        let parsed: Vec<String> = report
            .records
            .iter()
            .map(|r| r.destination().to_string())
            .collect();

        prop_assert_eq!(report.chunks, rows.len());
        prop_assert_eq!(report.dropped_chunks, rows.len() - expected.len());
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn trailing_lines_never_become_records(
        rows in prop::collection::vec((destination(), status()), 0..10),
        extra in 1usize..10
    ) {
        let mut lines: Vec<String> = rows
            .iter()
            .flat_map(|(destination, status)| chunk_lines(destination, status))
            .collect();
        let full = lines.len();
        lines.extend(chunk_lines("Tail City, FL", "Departed").into_iter().take(extra));

        let report = parse_records(&lines);
        let tail = report.skipped_tail.expect("tail should be reported");

        prop_assert_eq!(report.records.len(), rows.len());
        prop_assert_eq!(tail.len, extra);
        prop_assert_eq!(tail.first_line, full + 1);
        prop_assert_eq!(tail.last_line, lines.len());
    }

    #[test]
    fn filtering_is_idempotent(
        records in prop::collection::vec(flight_record(), 0..40),
        state in prop::sample::select(STATES.to_vec())
    ) {
        let state = StateCode::parse(state).unwrap();
        let once = filter_by_state(&records, &state);
        let twice = filter_by_state(&once, &state);

        prop_assert_eq!(&once, &twice);
        let suffix = state.suffix();
        prop_assert!(once.iter().all(|r| r.destination().ends_with(&suffix)));
    }

    #[test]
    fn aggregation_totals_match_record_counts(
        records in prop::collection::vec(flight_record(), 0..40),
        state in prop::sample::select(STATES.to_vec())
    ) {
        let state = StateCode::parse(state).unwrap();
        let filtered = filter_by_state(&records, &state);
        let aggregation = aggregate(&filtered);

        for (destination, statuses) in aggregation.iter() {
            let expected = filtered.iter().filter(|r| r.destination() == destination).count();
            prop_assert_eq!(statuses.values().sum::<u32>() as usize, expected);
            prop_assert!(statuses.values().all(|count| *count > 0));
        }
        let total: u32 = aggregation.iter().map(|(_, s)| s.values().sum::<u32>()).sum();
        prop_assert_eq!(total as usize, filtered.len());
    }

    #[test]
    fn aggregation_ignores_record_order(
        records in prop::collection::vec(flight_record(), 0..40)
    ) {
        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(aggregate(&records), aggregate(&reversed));
    }
}
