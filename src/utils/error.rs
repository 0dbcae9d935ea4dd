use thiserror::Error;

#[derive(Error, Debug)]
pub enum GpaError {
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

impl GpaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GpaError::ReadError { .. } | GpaError::EncodingError(_) => ErrorCategory::Input,
            GpaError::TomlError(_)
            | GpaError::ConfigError { .. }
            | GpaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GpaError::CsvError(_)
            | GpaError::SerializationError(_)
            | GpaError::ProcessingError { .. } => ErrorCategory::Output,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GpaError::ReadError { .. } => "Check that the roster file exists and is readable",
            GpaError::EncodingError(_) => "Save the roster file as UTF-8 text",
            GpaError::TomlError(_) | GpaError::ConfigError { .. } => {
                "Check the TOML config file syntax and keys"
            }
            GpaError::InvalidConfigValueError { .. } => {
                "Adjust the offending option and run again"
            }
            GpaError::CsvError(_)
            | GpaError::SerializationError(_)
            | GpaError::ProcessingError { .. } => "Try a different --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;
