use crate::domain::ports::Fetcher;
use crate::utils::error::{FlightError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("flight-status/", env!("CARGO_PKG_VERSION"));

/// Single-shot GET, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_user_agent(timeout, DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Requesting flight board: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Flight board response status: {}", status);

        if !status.is_success() {
            return Err(FlightError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start();
        let board = server.mock(|when, then| {
            when.method(GET).path("/fids");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html><body>Orlando, FL</body></html>");
        });

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch(&server.url("/fids")).await.unwrap();

        board.assert();
        assert!(body.contains("Orlando, FL"));
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start();
        let board = server.mock(|when, then| {
            when.method(GET)
                .path("/fids")
                .header("user-agent", "board-watcher/1.0");
            then.status(200).body("ok");
        });

        let fetcher =
            HttpFetcher::with_user_agent(Duration::from_secs(5), "board-watcher/1.0").unwrap();
        fetcher.fetch(&server.url("/fids")).await.unwrap();

        board.assert();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        let board = server.mock(|when, then| {
            when.method(GET).path("/fids");
            then.status(503);
        });

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch(&server.url("/fids")).await.unwrap_err();

        board.assert();
        match err {
            FlightError::HttpStatusError { status, .. } => assert_eq!(status, 503),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
