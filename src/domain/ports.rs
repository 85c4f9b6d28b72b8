use crate::domain::model::{InputMode, SourceDocument, StateCode, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn input_path(&self) -> Option<&str>;
    fn input_mode(&self) -> InputMode;
    fn state(&self) -> &StateCode;
    fn request_timeout(&self) -> Duration;
    fn summary_path(&self) -> Option<&str>;
    fn records_path(&self) -> Option<&str>;
}

/// Source of raw documents. A non-success response is an error.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// `Ok(None)` means there is nothing to process this run.
    async fn extract(&self) -> Result<Option<SourceDocument>>;
    async fn transform(&self, document: SourceDocument) -> Result<TransformResult>;
    /// Returns the paths written, if any.
    async fn load(&self, result: &TransformResult) -> Result<Vec<String>>;
}
