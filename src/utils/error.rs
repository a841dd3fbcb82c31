use thiserror::Error;

#[derive(Error, Debug)]
pub enum KwError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned non-success status: {status}")]
    HttpStatusError { status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, KwError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Config,
}

impl KwError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KwError::ApiError(_) | KwError::HttpStatusError { .. } => ErrorCategory::Network,
            KwError::CsvError(_) | KwError::SerializationError(_) => ErrorCategory::Data,
            KwError::IoError(_) => ErrorCategory::Storage,
            KwError::ConfigValidationError { .. }
            | KwError::InvalidConfigValueError { .. }
            | KwError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Fetch failures are survivable: the caller treats them as "no data".
            KwError::ApiError(_) | KwError::HttpStatusError { .. } => ErrorSeverity::Medium,
            KwError::CsvError(_) | KwError::SerializationError(_) => ErrorSeverity::High,
            KwError::IoError(_) => ErrorSeverity::High,
            KwError::ConfigValidationError { .. }
            | KwError::InvalidConfigValueError { .. }
            | KwError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check network connectivity, the API endpoint and the API key; \
                 the SEMrush API may also be rate-limiting this key"
                    .to_string()
            }
            ErrorCategory::Data => {
                "The API response did not match the expected semicolon-delimited layout; \
                 verify the export_columns configuration".to_string()
            }
            ErrorCategory::Storage => {
                "Check that the output path exists and is writable".to_string()
            }
            ErrorCategory::Config => {
                "Fix the configuration file and re-run; see the field named in the error"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KwError::ApiError(e) => format!("Could not reach the SEMrush API: {}", e),
            KwError::HttpStatusError { status } => {
                format!("The SEMrush API rejected the request (HTTP {})", status)
            }
            KwError::CsvError(e) => format!("Could not parse the API response: {}", e),
            KwError::IoError(e) => format!("File operation failed: {}", e),
            KwError::SerializationError(e) => format!("Could not write the JSON report: {}", e),
            KwError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            KwError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            KwError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
        }
    }
}
