use crate::core::process::{run_stages, FlightInput};
use crate::core::{ConfigProvider, Fetcher, Pipeline, Storage, TransformResult};
use crate::domain::model::SourceDocument;
use crate::utils::error::Result;

pub struct FlightPipeline<S: Storage, F: Fetcher, C: ConfigProvider> {
    storage: S,
    fetcher: F,
    config: C,
}

impl<S: Storage, F: Fetcher, C: ConfigProvider> FlightPipeline<S, F, C> {
    pub fn new(storage: S, fetcher: F, config: C) -> Self {
        Self {
            storage,
            fetcher,
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, F: Fetcher, C: ConfigProvider> Pipeline for FlightPipeline<S, F, C> {
    async fn extract(&self) -> Result<Option<SourceDocument>> {
        let mode = self.config.input_mode();

        if let Some(path) = self.config.input_path() {
            tracing::debug!("Reading flight board from file: {}", path);
            let bytes = self.storage.read_file(path).await?;
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Ok(Some(SourceDocument { body, mode }));
        }

        // 抓取失敗不中斷流程，視為沒有資料
        match self.fetcher.fetch(self.config.source_url()).await {
            Ok(body) => {
                tracing::debug!("Fetched {} bytes", body.len());
                Ok(Some(SourceDocument { body, mode }))
            }
            Err(e) => {
                tracing::warn!("Error fetching data: {}", e);
                Ok(None)
            }
        }
    }

    async fn transform(&self, document: SourceDocument) -> Result<TransformResult> {
        Ok(run_stages(
            FlightInput::from(&document),
            self.config.state(),
        ))
    }

    async fn load(&self, result: &TransformResult) -> Result<Vec<String>> {
        let mut written = Vec::new();

        if let (Some(path), Some(summary)) = (self.config.summary_path(), result.outcome.summary())
        {
            let mut contents = summary.to_string();
            contents.push('\n');
            self.storage.write_file(path, contents.as_bytes()).await?;
            tracing::debug!("Summary written to {}", path);
            written.push(path.to_string());
        }

        if let Some(path) = self.config.records_path() {
            let json = serde_json::to_string_pretty(&result.records)?;
            self.storage.write_file(path, json.as_bytes()).await?;
            tracing::debug!("{} records written to {}", result.records.len(), path);
            written.push(path.to_string());
        }

        Ok(written)
    }
}
