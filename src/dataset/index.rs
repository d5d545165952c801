//! District index derived from the record collection
//!
//! Query-independent: built once per dataset and used to populate the
//! district selector.

use std::collections::BTreeSet;

use serde::Serialize;

use super::record::Record;

/// Returns the distinct districts of `records`, sorted ascending.
///
/// Ordering is byte-wise lexicographic on the source strings, so it is
/// case-sensitive. An empty input yields an empty index.
pub fn build_index(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.district.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Sorted, deduplicated district names for one dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DatasetIndex {
    districts: Vec<String>,
}

impl DatasetIndex {
    /// Builds the index from a record collection
    pub fn build(records: &[Record]) -> Self {
        Self {
            districts: build_index(records),
        }
    }

    /// Districts in ascending order
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    /// Returns true if `district` is one of the indexed values
    pub fn contains(&self, district: &str) -> bool {
        self.districts
            .binary_search_by(|probe| probe.as_str().cmp(district))
            .is_ok()
    }

    /// Number of distinct districts
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    /// Returns true if the dataset had no records
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}
