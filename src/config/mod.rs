pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::core::ConfigProvider;
use crate::domain::model::{InputMode, StateCode};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

/// Newark (EWR) departures board.
pub const DEFAULT_SOURCE_URL: &str = "https://tracker.flightview.com/FVAccess3/tools/fids/fidsDefault.asp?accCustId=PANYNJ&fidsId=20001&fidsInit=departures&fidsApt=EWR";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "flight-status")]
#[command(about = "Summarize departures-board flight statuses for one state")]
pub struct CliConfig {
    #[arg(long, help = "Target state abbreviation (e.g., FL, CA). Default is FL.")]
    pub state: Option<String>,

    #[arg(long, help = "Departures board URL")]
    pub url: Option<String>,

    #[arg(long, help = "Read the board from a local file instead of fetching it")]
    pub input: Option<String>,

    #[arg(long, value_enum, help = "How to read the board: html or text")]
    pub input_mode: Option<InputMode>,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Also write the summary to this file")]
    pub output: Option<String>,

    #[arg(long, help = "Write every parsed record to this JSON file")]
    pub records_out: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command-line values win over the config file, which wins over defaults.
    pub fn into_run_config(self) -> Result<RunConfig> {
        let mut file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let source = &mut file_config.source;
        source.url = self.url.or(source.url.take());
        source.input_path = self.input.or(source.input_path.take());
        source.input_mode = self.input_mode.or(source.input_mode);
        source.timeout_seconds = self.timeout.or(source.timeout_seconds);
        file_config.filter.state = self.state.or(file_config.filter.state.take());
        let output = &mut file_config.output;
        output.summary_path = self.output.or(output.summary_path.take());
        output.records_path = self.records_out.or(output.records_path.take());

        file_config.validate()?;
        Ok(RunConfig::from_toml(&file_config))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source_url: String,
    pub input_path: Option<String>,
    pub input_mode: InputMode,
    pub state: StateCode,
    pub timeout: Duration,
    pub user_agent: String,
    pub summary_path: Option<String>,
    pub records_path: Option<String>,
}

impl RunConfig {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let source = &config.source;
        Self {
            source_url: source
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
            input_path: source.input_path.clone(),
            input_mode: source.input_mode.unwrap_or_default(),
            state: StateCode::resolve(config.filter.state.as_deref()),
            timeout: Duration::from_secs(source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)),
            user_agent: source
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            summary_path: config.output.summary_path.clone(),
            records_path: config.output.records_path.clone(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        match &self.input_path {
            Some(path) => validation::validate_path("input", path)?,
            None => validation::validate_url("url", &self.source_url)?,
        }
        validation::validate_positive_number("timeout", self.timeout.as_secs(), 1)?;
        if let Some(path) = &self.summary_path {
            validation::validate_path("output", path)?;
        }
        if let Some(path) = &self.records_path {
            validation::validate_path("records_out", path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref()
    }

    fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    fn state(&self) -> &StateCode {
        &self.state
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn summary_path(&self) -> Option<&str> {
        self.summary_path.as_deref()
    }

    fn records_path(&self) -> Option<&str> {
        self.records_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.state.as_str(), "FL");
        assert_eq!(config.input_mode, InputMode::Html);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.summary_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_state_in_file_falls_back() {
        let file_config = TomlConfig::from_toml_str("[filter]\nstate = \"Florida\"").unwrap();
        assert_eq!(RunConfig::from_toml(&file_config).state.as_str(), "FL");
    }

    #[test]
    fn test_input_file_skips_url_validation() {
        let config = RunConfig {
            source_url: String::new(),
            input_path: Some("board.html".to_string()),
            ..RunConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("flight-status.toml");
        std::fs::write(
            &path,
            r#"
[source]
url = "https://board.example.com/fids"
timeout_seconds = 12

[filter]
state = "tx"
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "flight-status",
            "--config",
            path.to_str().unwrap(),
            "--state",
            "ca",
            "--input-mode",
            "text",
        ]);
        let config = cli.into_run_config().unwrap();

        assert_eq!(config.state.as_str(), "CA");
        assert_eq!(config.source_url, "https://board.example.com/fids");
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.input_mode, InputMode::Text);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_zero_timeout() {
        let cli = CliConfig::parse_from(["flight-status", "--timeout", "0"]);
        assert!(cli.into_run_config().is_err());
    }
}
