pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, RunConfig};

pub use adapters::http::HttpFetcher;
pub use crate::core::aggregate::aggregate;
pub use crate::core::chunk::parse_records;
pub use crate::core::etl::{FlightEngine, RunReport};
pub use crate::core::filter::filter_by_state;
pub use crate::core::normalize::{normalize_lines, normalize_text};
pub use crate::core::pipeline::FlightPipeline;
pub use crate::core::process::{process, run_stages, FlightInput};
pub use crate::core::summary::format_summary;
pub use domain::model::{
    Aggregation, FlightRecord, InputMode, NoDataReason, ParseReport, ProcessOutcome, StateCode,
};
pub use utils::error::{FlightError, Result};
