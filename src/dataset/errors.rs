//! # Dataset Errors
//!
//! Error types for reading the bundled dataset file.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// File could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a JSON array of records
    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DatasetError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            DatasetError::Io { .. } => "LK_DATASET_IO",
            DatasetError::Parse(_) => "LK_DATASET_PARSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let io = DatasetError::Io {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.code(), "LK_DATASET_IO");
        assert!(io.to_string().contains("/missing.json"));

        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(DatasetError::from(parse).code(), "LK_DATASET_PARSE");
    }
}
