//! Query parameters and filter selectors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of records shown per page
pub const PAGE_SIZE: usize = 10;

/// Selector value meaning "no restriction"
pub const ALL: &str = "all";

/// District selector: either the "all" sentinel or one district name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DistrictFilter {
    #[default]
    All,
    Named(String),
}

impl DistrictFilter {
    /// Parses a selector value; "all" maps to the sentinel
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            DistrictFilter::All
        } else {
            DistrictFilter::Named(value.to_owned())
        }
    }

    /// Exact, case-sensitive comparison against a record's district
    pub fn matches(&self, district: &str) -> bool {
        match self {
            DistrictFilter::All => true,
            DistrictFilter::Named(name) => name == district,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DistrictFilter::All)
    }

    /// Selector value as the UI would send it
    pub fn as_str(&self) -> &str {
        match self {
            DistrictFilter::All => ALL,
            DistrictFilter::Named(name) => name,
        }
    }
}

impl From<String> for DistrictFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            DistrictFilter::All
        } else {
            DistrictFilter::Named(value)
        }
    }
}

impl From<&str> for DistrictFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<DistrictFilter> for String {
    fn from(filter: DistrictFilter) -> Self {
        match filter {
            DistrictFilter::All => ALL.to_owned(),
            DistrictFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for DistrictFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Office-type selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    /// Main offices only (`is_sub == false`)
    Main,
    /// Sub-offices only (`is_sub == true`)
    Sub,
}

impl TypeFilter {
    pub fn matches(&self, is_sub: bool) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Main => !is_sub,
            TypeFilter::Sub => is_sub,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => ALL,
            TypeFilter::Main => "main",
            TypeFilter::Sub => "sub",
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALL => Ok(TypeFilter::All),
            "main" => Ok(TypeFilter::Main),
            "sub" => Ok(TypeFilter::Sub),
            other => Err(format!(
                "unknown office type '{}' (expected all, main or sub)",
                other
            )),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three filter inputs.
///
/// Also the memo key for the filtered result: the result depends on these
/// fields and the records, never on the page number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub district_filter: DistrictFilter,
    pub type_filter: TypeFilter,
}

impl FilterCriteria {
    pub fn new(
        search_term: impl Into<String>,
        district_filter: impl Into<DistrictFilter>,
        type_filter: TypeFilter,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            district_filter: district_filter.into(),
            type_filter,
        }
    }

    /// True if any filter differs from its default
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || !self.district_filter.is_all()
            || self.type_filter != TypeFilter::All
    }
}

/// Complete query state for one session.
///
/// Only [`super::transition`] produces new values; the engine never edits
/// fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    #[serde(flatten)]
    criteria: FilterCriteria,
    current_page: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            current_page: 1,
        }
    }
}

impl QueryParams {
    pub(crate) fn new(criteria: FilterCriteria, current_page: usize) -> Self {
        Self {
            criteria,
            current_page,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search_term(&self) -> &str {
        &self.criteria.search_term
    }

    pub fn district_filter(&self) -> &DistrictFilter {
        &self.criteria.district_filter
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.criteria.type_filter
    }

    /// 1-based page number
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// True if any filter is set. The page number does not count.
    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_active()
    }

    /// Same filters, different page
    pub(crate) fn with_page(&self, current_page: usize) -> Self {
        Self {
            criteria: self.criteria.clone(),
            current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.search_term(), "");
        assert!(params.district_filter().is_all());
        assert_eq!(params.type_filter(), TypeFilter::All);
        assert_eq!(params.current_page(), 1);
        assert!(!params.has_active_filters());
    }

    #[test]
    fn test_district_sentinel() {
        assert_eq!(DistrictFilter::parse("all"), DistrictFilter::All);
        assert_eq!(
            DistrictFilter::parse("All"),
            DistrictFilter::Named("All".to_string())
        );
        assert!(DistrictFilter::All.matches("Kandy"));
        assert!(DistrictFilter::parse("Kandy").matches("Kandy"));
        assert!(!DistrictFilter::parse("kandy").matches("Kandy"));
    }

    #[test]
    fn test_district_serde_as_string() {
        let json = serde_json::to_string(&DistrictFilter::parse("Galle")).unwrap();
        assert_eq!(json, "\"Galle\"");

        let all: DistrictFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, DistrictFilter::All);
    }

    #[test]
    fn test_type_filter() {
        assert!(TypeFilter::All.matches(true));
        assert!(TypeFilter::All.matches(false));
        assert!(TypeFilter::Main.matches(false));
        assert!(!TypeFilter::Main.matches(true));
        assert!(TypeFilter::Sub.matches(true));
        assert!(!TypeFilter::Sub.matches(false));
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!("sub".parse::<TypeFilter>().unwrap(), TypeFilter::Sub);
        assert_eq!("all".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert!("Sub".parse::<TypeFilter>().is_err());
    }

    #[test]
    fn test_active_filters_ignore_page() {
        let params = QueryParams::default().with_page(3);
        assert!(!params.has_active_filters());

        let params = QueryParams::new(FilterCriteria::new("", "all", TypeFilter::Main), 1);
        assert!(params.has_active_filters());
    }

    #[test]
    fn test_params_serialize_flat() {
        let params = QueryParams::new(FilterCriteria::new("kan", "Kandy", TypeFilter::Sub), 2);
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["search_term"], "kan");
        assert_eq!(json["district_filter"], "Kandy");
        assert_eq!(json["type_filter"], "sub");
        assert_eq!(json["current_page"], 2);
    }
}
