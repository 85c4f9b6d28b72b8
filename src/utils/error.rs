use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid state abbreviation '{value}'. Must be 2 letters.")]
    InvalidStateCode { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FlightError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FlightError::HttpError(_) | FlightError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            FlightError::IoError(_) => ErrorCategory::Storage,
            FlightError::SerializationError(_) => ErrorCategory::Data,
            FlightError::ConfigValidationError { .. }
            | FlightError::InvalidConfigValueError { .. }
            | FlightError::MissingConfigError { .. }
            | FlightError::InvalidStateCode { .. } => ErrorCategory::Configuration,
        }
    }

    /// Network failures are recovered at the pipeline boundary, so they only
    /// reach the binary when a caller bypasses it.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FlightError::HttpError(_) => "Check the network connection and the source URL",
            FlightError::HttpStatusError { .. } => {
                "The flight board rejected the request; try again later or use --input"
            }
            FlightError::IoError(_) => "Check that the file exists and the path is writable",
            FlightError::SerializationError(_) => "Re-run with --verbose and inspect the records",
            FlightError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            FlightError::InvalidConfigValueError { .. } => {
                "Correct the value in the config file or on the command line"
            }
            FlightError::MissingConfigError { .. } => "Provide the missing setting",
            FlightError::InvalidStateCode { .. } => "Use a two-letter code such as FL or CA",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FlightError::HttpError(_) | FlightError::HttpStatusError { .. } => {
                "Failed to fetch flight data.".to_string()
            }
            FlightError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlightError>;
