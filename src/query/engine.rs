//! Query engine for lkpostal
//!
//! Owns the record collection, its district index and the session's query
//! parameters. Events go through [`transition`]; the filtered result is
//! memoized on the filter criteria, so page moves and repeated identical
//! filter events never rescan the records.
//!
//! Flow per event:
//! 1. Compute the transition against the current page count
//! 2. On rejection, leave all state untouched
//! 3. On success, store the new parameters
//! 4. If the event touched filters, refresh the memo (reuse on equal key)

use crate::dataset::{DatasetIndex, Record};
use crate::observability::{
    log_event, log_event_with_fields, Event, Logger, QueryMetrics, Severity,
};

use super::filters::matching_positions;
use super::paginate::{paginate, total_pages};
use super::params::{DistrictFilter, FilterCriteria, QueryParams, TypeFilter, PAGE_SIZE};
use super::transition::{transition, QueryEvent, TransitionOutcome};
use super::view::{QueryView, ResultStatus};

/// Filtered result cached against the criteria that produced it
#[derive(Debug)]
struct FilterMemo {
    key: FilterCriteria,
    /// Ascending record positions
    positions: Vec<usize>,
}

/// In-memory query engine over a fixed record collection
#[derive(Debug)]
pub struct QueryEngine {
    records: Vec<Record>,
    index: DatasetIndex,
    params: QueryParams,
    page_size: usize,
    memo: FilterMemo,
    metrics: QueryMetrics,
}

impl QueryEngine {
    /// Creates an engine with default parameters and the standard page size
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_page_size(records, PAGE_SIZE)
    }

    /// Creates an engine with a custom page size (values below 1 become 1)
    pub fn with_page_size(records: Vec<Record>, page_size: usize) -> Self {
        let index = Self::build_index(&records);
        let params = QueryParams::default();
        let metrics = QueryMetrics::new();
        let memo = Self::evaluate(&records, params.criteria(), &metrics);

        Self {
            records,
            index,
            params,
            page_size: page_size.max(1),
            memo,
            metrics,
        }
    }

    /// Applies one event atomically.
    ///
    /// Rejected page moves leave the engine unchanged and are only logged.
    pub fn dispatch(&mut self, event: QueryEvent) -> TransitionOutcome {
        let outcome = transition(&self.params, &event, self.total_pages());

        match &outcome {
            TransitionOutcome::Applied(next) => {
                self.params = next.clone();
                self.metrics.increment_transitions_applied();

                if event == QueryEvent::ClearFilters {
                    self.metrics.increment_filters_cleared();
                    log_event(Event::FiltersCleared);
                }
                if event.touches_filters() {
                    self.refresh();
                }

                if Logger::enabled(Severity::Trace) {
                    let page = self.params.current_page().to_string();
                    log_event_with_fields(
                        Event::TransitionApplied,
                        &[("event", event.name()), ("page", page.as_str())],
                    );
                }
            }
            TransitionOutcome::Rejected(reason) => {
                self.metrics.increment_transitions_rejected();

                if Logger::enabled(Severity::Trace) {
                    let reason = reason.to_string();
                    log_event_with_fields(
                        Event::TransitionRejected,
                        &[("event", event.name()), ("reason", reason.as_str())],
                    );
                }
            }
        }

        outcome
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> TransitionOutcome {
        self.dispatch(QueryEvent::SetSearchTerm(term.into()))
    }

    pub fn set_district_filter(
        &mut self,
        district: impl Into<DistrictFilter>,
    ) -> TransitionOutcome {
        self.dispatch(QueryEvent::SetDistrictFilter(district.into()))
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) -> TransitionOutcome {
        self.dispatch(QueryEvent::SetTypeFilter(type_filter))
    }

    pub fn next_page(&mut self) -> TransitionOutcome {
        self.dispatch(QueryEvent::NextPage)
    }

    pub fn prev_page(&mut self) -> TransitionOutcome {
        self.dispatch(QueryEvent::PrevPage)
    }

    pub fn goto_page(&mut self, page: usize) -> TransitionOutcome {
        self.dispatch(QueryEvent::GotoPage(page))
    }

    pub fn clear_filters(&mut self) -> TransitionOutcome {
        self.dispatch(QueryEvent::ClearFilters)
    }

    /// Swaps in a new record collection.
    ///
    /// Filters are kept (a district missing from the new data simply
    /// matches nothing). The page is clamped into the new
    /// `[1, max(1, total_pages)]` range.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.index = Self::build_index(&records);
        self.records = records;
        self.memo = Self::evaluate(&self.records, self.params.criteria(), &self.metrics);

        let last_page = self.total_pages().max(1);
        if self.params.current_page() > last_page {
            self.params = self.params.with_page(last_page);
        }

        let count = self.records.len().to_string();
        let page = self.params.current_page().to_string();
        log_event_with_fields(
            Event::DatasetReplaced,
            &[("page", page.as_str()), ("records", count.as_str())],
        );
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    /// District selector values, ascending
    pub fn districts(&self) -> &[String] {
        self.index.districts()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn metrics(&self) -> &QueryMetrics {
        &self.metrics
    }

    /// Records matching the current filters, in source order
    pub fn filtered(&self) -> Vec<&Record> {
        self.memo
            .positions
            .iter()
            .map(|&pos| &self.records[pos])
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.memo.positions.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page_size)
    }

    /// Records on the current page
    pub fn page(&self) -> Vec<&Record> {
        paginate(&self.memo.positions, self.params.current_page(), self.page_size)
            .items
            .iter()
            .map(|&pos| &self.records[pos])
            .collect()
    }

    pub fn has_active_filters(&self) -> bool {
        self.params.has_active_filters()
    }

    /// Snapshot of the output boundary
    pub fn view(&self) -> QueryView<'_> {
        let filtered_count = self.filtered_count();
        let total_pages = self.total_pages();
        let current_page = self.params.current_page();

        QueryView {
            filtered_count,
            current_page,
            total_pages,
            page_size: self.page_size,
            records: self.page(),
            districts: self.districts(),
            has_active_filters: self.has_active_filters(),
            status: if filtered_count == 0 {
                ResultStatus::NoResults
            } else {
                ResultStatus::Results
            },
            can_prev: current_page > 1,
            can_next: current_page < total_pages,
        }
    }

    fn refresh(&mut self) {
        if &self.memo.key == self.params.criteria() {
            self.metrics.increment_cache_hits();
            log_event(Event::FilterCacheHit);
            return;
        }
        self.memo = Self::evaluate(&self.records, self.params.criteria(), &self.metrics);
    }

    fn evaluate(
        records: &[Record],
        criteria: &FilterCriteria,
        metrics: &QueryMetrics,
    ) -> FilterMemo {
        let positions = matching_positions(records, criteria);
        metrics.increment_evaluations();

        if Logger::enabled(Severity::Trace) {
            let matched = positions.len().to_string();
            log_event_with_fields(
                Event::FilterEvaluated,
                &[
                    ("matched", matched.as_str()),
                    ("search_term", criteria.search_term.as_str()),
                ],
            );
        }

        FilterMemo {
            key: criteria.clone(),
            positions,
        }
    }

    fn build_index(records: &[Record]) -> DatasetIndex {
        let index = DatasetIndex::build(records);
        let districts = index.len().to_string();
        log_event_with_fields(Event::IndexBuilt, &[("districts", districts.as_str())]);
        index
    }
}
