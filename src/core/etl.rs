use crate::core::Pipeline;
use crate::domain::model::{NoDataReason, ProcessOutcome};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: ProcessOutcome,
    pub parsed_records: usize,
    pub written: Vec<String>,
}

pub struct FlightEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FlightEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Extracting flight board...");
        let Some(document) = self.pipeline.extract().await? else {
            tracing::warn!("No flight board to process");
            return Ok(RunReport {
                outcome: ProcessOutcome::NoData(NoDataReason::FetchFailed),
                parsed_records: 0,
                written: Vec::new(),
            });
        };

        tracing::info!("Parsing flight board ({} bytes)...", document.body.len());
        let result = self.pipeline.transform(document).await?;
        tracing::info!("Parsed {} flights", result.records.len());

        let written = self.pipeline.load(&result).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(RunReport {
            parsed_records: result.records.len(),
            outcome: result.outcome,
            written,
        })
    }
}
