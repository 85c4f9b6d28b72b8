use crate::domain::model::{FlightRecord, StateCode};

/// Keeps records whose destination ends with `", <state>"`, in input order.
pub fn filter_by_state(records: &[FlightRecord], state: &StateCode) -> Vec<FlightRecord> {
    let suffix = state.suffix();
    records
        .iter()
        .filter(|record| record.destination().ends_with(&suffix))
        .cloned()
        .collect()
}
