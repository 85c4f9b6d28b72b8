// Domain layer: flight records, aggregation and the ports the run depends on.

pub mod model;
pub mod ports;
