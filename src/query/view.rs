//! Output handed to the display collaborator

use serde::{Serialize, Serializer};

use crate::dataset::Record;

/// Whether the current filters matched anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Results,
    /// Valid terminal state, not an error
    NoResults,
}

/// Everything a renderer needs for one recomputation
#[derive(Debug, Clone, Serialize)]
pub struct QueryView<'a> {
    /// Size of the filtered result
    pub filtered_count: usize,
    pub current_page: usize,
    /// 0 when nothing matched
    pub total_pages: usize,
    pub page_size: usize,
    /// The page slice, each row tagged with its office type label
    #[serde(serialize_with = "serialize_rows")]
    pub records: Vec<&'a Record>,
    /// District selector values
    pub districts: &'a [String],
    pub has_active_filters: bool,
    pub status: ResultStatus,
    pub can_prev: bool,
    pub can_next: bool,
}

impl QueryView<'_> {
    /// Footer text, e.g. "Page 2 of 7". `None` when there are no results,
    /// so a renderer never shows "Page 1 of 0".
    pub fn page_label(&self) -> Option<String> {
        match self.status {
            ResultStatus::Results => Some(format!(
                "Page {} of {}",
                self.current_page, self.total_pages
            )),
            ResultStatus::NoResults => None,
        }
    }
}

fn serialize_rows<S: Serializer>(records: &[&Record], serializer: S) -> Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Row<'r> {
        #[serde(flatten)]
        record: &'r Record,
        office_type: &'static str,
    }

    serializer.collect_seq(records.iter().map(|record| Row {
        record,
        office_type: record.office_type(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(records: Vec<&'a Record>, districts: &'a [String]) -> QueryView<'a> {
        let filtered_count = records.len();
        QueryView {
            filtered_count,
            current_page: 1,
            total_pages: usize::from(filtered_count > 0),
            page_size: 10,
            records,
            districts,
            has_active_filters: false,
            status: if filtered_count == 0 {
                ResultStatus::NoResults
            } else {
                ResultStatus::Results
            },
            can_prev: false,
            can_next: false,
        }
    }

    #[test]
    fn test_rows_carry_office_type() {
        let main = Record::new("80000", "Galle", "GL", "Galle", false);
        let sub = Record::new("80042", "Unawatuna", "GL", "Galle", true);
        let districts = vec!["Galle".to_string()];

        let value = serde_json::to_value(view(vec![&main, &sub], &districts)).unwrap();

        assert_eq!(value["records"][0]["postal_code"], "80000");
        assert_eq!(value["records"][0]["office_type"], "Main Office");
        assert_eq!(value["records"][1]["is_sub"], true);
        assert_eq!(value["records"][1]["office_type"], "Sub Office");
        assert_eq!(value["status"], "results");
    }

    #[test]
    fn test_no_results_has_no_page_label() {
        let value = view(Vec::new(), &[]);

        assert_eq!(value.status, ResultStatus::NoResults);
        assert!(value.page_label().is_none());
        assert_eq!(serde_json::to_value(&value).unwrap()["status"], "no_results");
    }
}
