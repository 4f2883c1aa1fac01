use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("could not find {record_type} record for {name}: {message}")]
    DnsLookupError {
        record_type: String,
        name: String,
        message: String,
    },

    #[error("Verification API error: {message}")]
    ApiResponseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckError {
    pub fn dns(record_type: &str, name: &str, message: impl Into<String>) -> Self {
        CheckError::DnsLookupError {
            record_type: record_type.to_string(),
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub fn api_response(message: impl Into<String>) -> Self {
        CheckError::ApiResponseError {
            message: message.into(),
        }
    }

    /// Short message meant for a terminal user rather than a log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::ApiError(_) | CheckError::ApiResponseError { .. } => {
                "The verification API could not be reached or returned an unusable response"
                    .to_string()
            }
            CheckError::CsvError(_) | CheckError::IoError(_) => {
                "Failed to read input or write output".to_string()
            }
            CheckError::SerializationError(_) => "Failed to decode JSON data".to_string(),
            CheckError::DnsLookupError {
                record_type, name, ..
            } => format!("DNS {} lookup for {} failed", record_type, name),
            CheckError::ConfigError { message } => format!("Configuration problem: {}", message),
            CheckError::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::ApiError(_) | CheckError::ApiResponseError { .. } => {
                "Check network connectivity and the --api-endpoint / --api-key settings"
            }
            CheckError::CsvError(_) | CheckError::IoError(_) => {
                "Make sure standard input and output are readable and writable"
            }
            CheckError::SerializationError(_) => "Verify the API returns a JSON object",
            CheckError::DnsLookupError { .. } => {
                "Check the domain spelling and the system resolver configuration"
            }
            CheckError::ConfigError { .. }
            | CheckError::MissingConfigError { .. }
            | CheckError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
