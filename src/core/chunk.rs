//! Fixed-stride chunk parser.
//!
//! The departures board flattens every row into exactly ten text lines, so
//! the line list is walked ten at a time and the destination and status are
//! read from fixed offsets. There is no header detection: a chunk is kept
//! whenever its two fields have a plausible shape. The board's header row
//! only disappears because `To` is too short to be a destination.

use crate::domain::model::{FlightRecord, ParseReport, SkippedTail};

pub const CHUNK_SIZE: usize = 10;
pub const DESTINATION_OFFSET: usize = 3;
pub const STATUS_OFFSET: usize = 4;

pub fn parse_records<S: AsRef<str>>(lines: &[S]) -> ParseReport {
    if lines.is_empty() {
        tracing::warn!("No text lines to parse.");
        return ParseReport::default();
    }

    let chunks = lines.chunks_exact(CHUNK_SIZE);
    let remainder = chunks.remainder().len();

    let mut report = ParseReport::default();
    for chunk in chunks {
        report.chunks += 1;
        let destination = chunk[DESTINATION_OFFSET].as_ref();
        let status = chunk[STATUS_OFFSET].as_ref();
        match FlightRecord::from_fields(destination, status) {
            Some(record) => report.records.push(record),
            None => {
                report.dropped_chunks += 1;
                tracing::debug!(
                    chunk = report.chunks,
                    destination,
                    status,
                    "Dropping chunk with implausible fields"
                );
            }
        }
    }

    if remainder > 0 {
        let first_line = lines.len() - remainder + 1;
        tracing::warn!(
            "Skipping incomplete chunk at the end of data (lines {}-{}). Chunk size: {}",
            first_line,
            lines.len(),
            remainder
        );
        report.skipped_tail = Some(SkippedTail {
            first_line,
            last_line: lines.len(),
            len: remainder,
        });
    }

    if report.records.is_empty() {
        tracing::warn!(
            "No flights extracted after processing {} text lines in {}-line chunks.",
            lines.len(),
            CHUNK_SIZE
        );
    }

    report
}
