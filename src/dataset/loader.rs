//! Dataset loading
//!
//! The dataset is a JSON array of records in source order. Loading only
//! deserializes; records are not validated.

use std::fs;
use std::path::Path;

use crate::observability::{log_event_with_fields, Event};

use super::errors::{DatasetError, DatasetResult};
use super::record::Record;

/// Parses a JSON array of records
pub fn parse_records(json: &str) -> DatasetResult<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    Ok(records)
}

/// Reads and parses the dataset file at `path`
pub fn load_records(path: &Path) -> DatasetResult<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content)?;

    let count = records.len().to_string();
    let path_str = path.display().to_string();
    log_event_with_fields(
        Event::DatasetLoaded,
        &[("path", path_str.as_str()), ("records", count.as_str())],
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"[
        {"postal_code": "00100", "post_office": "Colombo 1", "division_code": "CMB", "district": "Colombo", "is_sub": false},
        {"postal_code": "20000", "post_office": "Kandy", "division_code": "KDY", "district": "Kandy", "is_sub": false}
    ]"#;

    #[test]
    fn test_parse_preserves_order() {
        let records = parse_records(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].post_office, "Colombo 1");
        assert_eq!(records[1].post_office, "Kandy");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_records(r#"[{"postal_code": "1"}]"#).unwrap_err();
        assert_eq!(err.code(), "LK_DATASET_PARSE");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("data.json")).unwrap_err();
        assert_eq!(err.code(), "LK_DATASET_IO");
    }
}
