use crate::domain::model::{Aggregation, FlightRecord};

pub fn aggregate(records: &[FlightRecord]) -> Aggregation {
    records
        .iter()
        .fold(Aggregation::new(), |mut aggregation, record| {
            aggregation.record(record);
            aggregation
        })
}
