//! The top-level `process` operation: normalize, parse, filter, aggregate and
//! format in one pass, with a distinct no-data reason for each empty stage.

use crate::adapters::html::extract_body_text;
use crate::core::aggregate::aggregate;
use crate::core::chunk::parse_records;
use crate::core::filter::filter_by_state;
use crate::core::normalize::{normalize_lines, normalize_text};
use crate::core::summary::format_summary;
use crate::domain::model::{
    FlightRecord, InputMode, NoDataReason, ProcessOutcome, SourceDocument, StateCode,
    TransformResult,
};

#[derive(Debug, Clone, Copy)]
pub enum FlightInput<'a> {
    Html(&'a str),
    Text(&'a str),
    Lines(&'a [String]),
}

impl<'a> From<&'a SourceDocument> for FlightInput<'a> {
    fn from(document: &'a SourceDocument) -> Self {
        match document.mode {
            InputMode::Html => FlightInput::Html(&document.body),
            InputMode::Text => FlightInput::Text(&document.body),
        }
    }
}

pub fn process(input: FlightInput<'_>, state: &StateCode) -> ProcessOutcome {
    run_stages(input, state).outcome
}

/// Like [`process`], but also hands back every parsed record.
pub fn run_stages(input: FlightInput<'_>, state: &StateCode) -> TransformResult {
    let lines = match input {
        FlightInput::Html(html) => match extract_body_text(html) {
            Some(text) => normalize_text(&text),
            None => Vec::new(),
        },
        FlightInput::Text(text) => normalize_text(text),
        FlightInput::Lines(lines) => normalize_lines(lines),
    };

    if lines.is_empty() {
        return TransformResult {
            records: Vec::new(),
            outcome: ProcessOutcome::NoData(NoDataReason::NoTextExtracted),
        };
    }
    tracing::debug!("Normalized {} text lines", lines.len());

    let report = parse_records(&lines);
    tracing::debug!(
        chunks = report.chunks,
        dropped = report.dropped_chunks,
        records = report.records.len(),
        "Parsed flight chunks"
    );
    let records = report.records;

    let outcome = summarize(&records, state);
    TransformResult { records, outcome }
}

fn summarize(records: &[FlightRecord], state: &StateCode) -> ProcessOutcome {
    if records.is_empty() {
        return ProcessOutcome::NoData(NoDataReason::NoRecordsParsed);
    }

    let matching = filter_by_state(records, state);
    if matching.is_empty() {
        return ProcessOutcome::NoData(NoDataReason::NoFlightsForState {
            state: state.clone(),
            parsed_total: records.len(),
        });
    }
    tracing::debug!("{} of {} flights are for {}", matching.len(), records.len(), state);

    let aggregation = aggregate(&matching);
    match format_summary(&aggregation, state) {
        Some(summary) => ProcessOutcome::Summary(summary),
        None => ProcessOutcome::NoData(NoDataReason::EmptyAggregation),
    }
}
