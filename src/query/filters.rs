//! Record filtering
//!
//! Three predicates, AND semantics:
//! - text: office name or district contain the term (case-insensitive),
//!   or the postal code contains it literally
//! - district: exact match unless "all"
//! - type: main/sub office flag unless "all"
//!
//! Filtering is stable: matches keep their source order.

use crate::dataset::Record;

use super::params::FilterCriteria;

/// Evaluates filter criteria against records
pub struct RecordFilter<'c> {
    criteria: &'c FilterCriteria,
    /// Search term lower-cased once per evaluation
    lowered_term: String,
}

impl<'c> RecordFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            lowered_term: criteria.search_term.to_lowercase(),
        }
    }

    /// Checks if a record matches all predicates
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_text(record)
            && self.criteria.district_filter.matches(&record.district)
            && self.criteria.type_filter.matches(record.is_sub)
    }

    fn matches_text(&self, record: &Record) -> bool {
        let term = &self.criteria.search_term;
        if term.is_empty() {
            return true;
        }

        record.post_office.to_lowercase().contains(&self.lowered_term)
            // Codes are compared as written, no case folding
            || record.postal_code.contains(term.as_str())
            || record.district.to_lowercase().contains(&self.lowered_term)
    }
}

/// Returns the records matching `criteria`, in source order
pub fn filter_records<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    let filter = RecordFilter::new(criteria);
    records.iter().filter(|record| filter.matches(record)).collect()
}

/// Positions of the matching records, ascending
pub(crate) fn matching_positions(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    let filter = RecordFilter::new(criteria);
    records
        .iter()
        .enumerate()
        .filter_map(|(pos, record)| filter.matches(record).then_some(pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::params::{DistrictFilter, TypeFilter};

    fn sample() -> Vec<Record> {
        vec![
            Record::new("00100", "Colombo 1", "CMB", "Colombo", false),
            Record::new("10120", "Maharagama", "CMB", "Colombo", true),
            Record::new("20000", "Kandy", "KDY", "Kandy", false),
            Record::new("20400", "Peradeniya", "KDY", "Kandy", true),
            Record::new("11500", "Negombo", "GMP", "Gampaha", false),
        ]
    }

    fn criteria(term: &str, district: &str, kind: TypeFilter) -> FilterCriteria {
        FilterCriteria::new(term, district, kind)
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let records = sample();
        let result = filter_records(&records, &FilterCriteria::default());
        assert_eq!(result.len(), records.len());
    }

    #[test]
    fn test_text_matches_office_case_insensitive() {
        let records = sample();
        let result = filter_records(&records, &criteria("PERADEN", "all", TypeFilter::All));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].post_office, "Peradeniya");
    }

    #[test]
    fn test_text_matches_district() {
        let records = sample();
        let result = filter_records(&records, &criteria("gampaha", "all", TypeFilter::All));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].post_office, "Negombo");
    }

    #[test]
    fn test_text_matches_postal_code_substring() {
        let records = sample();
        let result = filter_records(&records, &criteria("012", "all", TypeFilter::All));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].postal_code, "10120");
    }

    #[test]
    fn test_district_exact_match() {
        let records = sample();
        assert_eq!(filter_records(&records, &criteria("", "Kandy", TypeFilter::All)).len(), 2);
        assert!(filter_records(&records, &criteria("", "kandy", TypeFilter::All)).is_empty());
    }

    #[test]
    fn test_unknown_district_matches_nothing() {
        let records = sample();
        let result = filter_records(
            &records,
            &FilterCriteria::new("", DistrictFilter::Named("Atlantis".into()), TypeFilter::All),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_type_predicate() {
        let records = sample();
        let main = filter_records(&records, &criteria("", "all", TypeFilter::Main));
        let sub = filter_records(&records, &criteria("", "all", TypeFilter::Sub));

        assert_eq!(main.len(), 3);
        assert!(main.iter().all(|r| !r.is_sub));
        assert_eq!(sub.len(), 2);
        assert!(sub.iter().all(|r| r.is_sub));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let records = sample();
        let result = filter_records(&records, &criteria("colombo", "Colombo", TypeFilter::Sub));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].post_office, "Maharagama");
    }

    #[test]
    fn test_positions_follow_source_order() {
        let records = sample();
        let positions = matching_positions(&records, &criteria("", "all", TypeFilter::Sub));
        assert_eq!(positions, vec![1, 3]);
    }
}
