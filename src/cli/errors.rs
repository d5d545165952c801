//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code, except
//! `InvalidEvent`, which the session loop reports inline and skips.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Dataset could not be loaded
    DatasetError,
    /// Session input line is not a known event
    InvalidEvent,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "LK_CLI_CONFIG_ERROR",
            Self::IoError => "LK_CLI_IO_ERROR",
            Self::DatasetError => "LK_CLI_DATASET_ERROR",
            Self::InvalidEvent => "LK_CLI_INVALID_EVENT",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Invalid session event
    pub fn invalid_event(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidEvent, msg)
    }

    /// No dataset path in config or on the command line
    pub fn missing_data_path() -> Self {
        Self::config_error("No dataset given. Pass --data or set data_path in the config file.")
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        Self::new(
            CliErrorCode::DatasetError,
            format!("{} ({})", e, e.code()),
        )
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("page_size must be > 0");
        assert_eq!(
            err.to_string(),
            "LK_CLI_CONFIG_ERROR: page_size must be > 0"
        );
    }

    #[test]
    fn test_dataset_error_conversion() {
        let parse = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let err = CliError::from(DatasetError::from(parse));

        assert_eq!(err.code(), &CliErrorCode::DatasetError);
        assert!(err.message().contains("LK_DATASET_PARSE"));
    }
}
