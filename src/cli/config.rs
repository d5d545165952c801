//! Configuration file handling
//!
//! The file is optional. Every field has a default; `--data` on the command
//! line wins over `data_path`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::query::PAGE_SIZE;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dataset file (optional)
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Records per page (default 10)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_page_size() -> usize {
    PAGE_SIZE
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.page_size == 0 {
            return Err(CliError::config_error("page_size must be > 0"));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Dataset path, preferring the command-line override
    pub fn data_path(&self, cli_override: Option<PathBuf>) -> CliResult<PathBuf> {
        cli_override
            .or_else(|| self.data_path.clone())
            .ok_or_else(CliError::missing_data_path)
    }
}
