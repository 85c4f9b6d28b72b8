use crate::utils::error::Result;
use crate::utils::validation::validate_state_code;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One departure row lifted out of a 10-line chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    destination: String,
    status: String,
}

impl FlightRecord {
    /// Builds a record if the fields look like a real row: both non-empty,
    /// destination longer than 2 characters, status longer than 1.
    pub fn from_fields(destination: &str, status: &str) -> Option<Self> {
        let destination = destination.trim();
        let status = status.trim();

        if destination.chars().count() > 2 && status.chars().count() > 1 {
            Some(Self {
                destination: destination.to_string(),
                status: status.to_string(),
            })
        } else {
            None
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

/// destination -> status -> count, kept ordered so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregation {
    destinations: BTreeMap<String, BTreeMap<String, u32>>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, flight: &FlightRecord) {
        let statuses = self
            .destinations
            .entry(flight.destination().to_string())
            .or_default();
        let count = statuses.entry(flight.status().to_string()).or_insert(0);
        *count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn statuses(&self, destination: &str) -> Option<&BTreeMap<String, u32>> {
        self.destinations.get(destination)
    }

    pub fn count(&self, destination: &str, status: &str) -> u32 {
        self.statuses(destination)
            .and_then(|statuses| statuses.get(status))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_for(&self, destination: &str) -> u32 {
        self.statuses(destination)
            .map(|statuses| statuses.values().sum())
            .unwrap_or(0)
    }

    /// Destinations in ascending order, each with its statuses in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, u32>)> {
        self.destinations
            .iter()
            .map(|(destination, statuses)| (destination.as_str(), statuses))
    }
}

pub const DEFAULT_STATE: &str = "FL";

/// Two upper-case ASCII letters, e.g. `FL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateCode(String);

impl StateCode {
    /// Strict parse: case-insensitive, surrounding whitespace ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let candidate = raw.trim().to_uppercase();
        validate_state_code(&candidate)?;
        Ok(Self(candidate))
    }

    /// Lenient parse used for user input: anything invalid falls back to
    /// [`DEFAULT_STATE`] with a warning.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(raw) => Self::parse(raw).unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid state abbreviation '{}'. Must be 2 letters. Using default '{}'.",
                    raw,
                    DEFAULT_STATE
                );
                Self::default()
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The literal destination suffix this code matches, e.g. `", FL"`.
    pub fn suffix(&self) -> String {
        format!(", {}", self.0)
    }
}

impl Default for StateCode {
    fn default() -> Self {
        Self(DEFAULT_STATE.to_string())
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Html,
    Text,
}

/// A fetched or loaded document together with how to read it.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub body: String,
    pub mode: InputMode,
}

/// The trailing lines that did not fill a whole chunk. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTail {
    pub first_line: usize,
    pub last_line: usize,
    pub len: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub records: Vec<FlightRecord>,
    pub chunks: usize,
    pub dropped_chunks: usize,
    pub skipped_tail: Option<SkippedTail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoDataReason {
    FetchFailed,
    NoTextExtracted,
    NoRecordsParsed,
    NoFlightsForState { state: StateCode, parsed_total: usize },
    EmptyAggregation,
}

impl fmt::Display for NoDataReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDataReason::FetchFailed => write!(f, "Failed to fetch flight data."),
            NoDataReason::NoTextExtracted => {
                write!(f, "No text lines extracted from the document.")
            }
            NoDataReason::NoRecordsParsed => {
                write!(f, "No flights parsed or an error occurred during parsing.")
            }
            NoDataReason::NoFlightsForState {
                state,
                parsed_total,
            } => write!(
                f,
                "No flights to {state} found. Found {parsed_total} flights total, but none were for {state}."
            ),
            NoDataReason::EmptyAggregation => {
                write!(f, "No data to display after filtering and aggregation.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Summary(String),
    NoData(NoDataReason),
}

impl ProcessOutcome {
    pub fn summary(&self) -> Option<&str> {
        match self {
            ProcessOutcome::Summary(text) => Some(text.as_str()),
            ProcessOutcome::NoData(_) => None,
        }
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessOutcome::Summary(text) => f.write_str(text),
            ProcessOutcome::NoData(reason) => write!(f, "{}", reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<FlightRecord>,
    pub outcome: ProcessOutcome,
}
