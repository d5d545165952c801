//! Query state transitions
//!
//! Every parameter change goes through [`transition`], a pure
//! `(QueryParams, QueryEvent) -> QueryParams` step:
//! - Changing any filter resets the page to 1 in the same step
//! - Page moves change only the page, and are rejected (not clamped) when
//!   they would leave `[1, max(1, total_pages)]`
//! - Clearing filters replaces all four parameters at once
//!
//! No event is ever partially applied.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::params::{DistrictFilter, FilterCriteria, QueryParams, TypeFilter};

/// Events accepted from the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum QueryEvent {
    SetSearchTerm(String),
    SetDistrictFilter(DistrictFilter),
    SetTypeFilter(TypeFilter),
    NextPage,
    PrevPage,
    /// Jump to a 1-based page
    GotoPage(usize),
    ClearFilters,
}

impl QueryEvent {
    /// True for events that change the filtered result
    pub fn touches_filters(&self) -> bool {
        matches!(
            self,
            QueryEvent::SetSearchTerm(_)
                | QueryEvent::SetDistrictFilter(_)
                | QueryEvent::SetTypeFilter(_)
                | QueryEvent::ClearFilters
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueryEvent::SetSearchTerm(_) => "set_search_term",
            QueryEvent::SetDistrictFilter(_) => "set_district_filter",
            QueryEvent::SetTypeFilter(_) => "set_type_filter",
            QueryEvent::NextPage => "next_page",
            QueryEvent::PrevPage => "prev_page",
            QueryEvent::GotoPage(_) => "goto_page",
            QueryEvent::ClearFilters => "clear_filters",
        }
    }
}

/// Why a page move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// Target page is below 1
    BeforeFirstPage,
    /// Target page is past `max(1, total_pages)`
    PastLastPage { total_pages: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::BeforeFirstPage => write!(f, "already on the first page"),
            RejectReason::PastLastPage { total_pages } => {
                write!(f, "past the last page ({} total)", total_pages)
            }
        }
    }
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Event accepted; carries the new parameters
    Applied(QueryParams),
    /// Event refused; parameters are unchanged
    Rejected(RejectReason),
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TransitionOutcome::Rejected(_))
    }
}

/// Applies `event` to `params`.
///
/// `total_pages` is the page count of the filtered result for `params`;
/// it bounds page moves only.
pub fn transition(
    params: &QueryParams,
    event: &QueryEvent,
    total_pages: usize,
) -> TransitionOutcome {
    let last_page = total_pages.max(1);
    let criteria = params.criteria();

    match event {
        QueryEvent::SetSearchTerm(term) => TransitionOutcome::Applied(QueryParams::new(
            FilterCriteria {
                search_term: term.clone(),
                ..criteria.clone()
            },
            1,
        )),
        QueryEvent::SetDistrictFilter(district) => TransitionOutcome::Applied(QueryParams::new(
            FilterCriteria {
                district_filter: district.clone(),
                ..criteria.clone()
            },
            1,
        )),
        QueryEvent::SetTypeFilter(type_filter) => TransitionOutcome::Applied(QueryParams::new(
            FilterCriteria {
                type_filter: *type_filter,
                ..criteria.clone()
            },
            1,
        )),
        QueryEvent::NextPage => goto(params, params.current_page().saturating_add(1), last_page),
        QueryEvent::PrevPage => goto(params, params.current_page().saturating_sub(1), last_page),
        QueryEvent::GotoPage(page) => goto(params, *page, last_page),
        QueryEvent::ClearFilters => TransitionOutcome::Applied(QueryParams::default()),
    }
}

fn goto(params: &QueryParams, page: usize, last_page: usize) -> TransitionOutcome {
    if page == 0 {
        TransitionOutcome::Rejected(RejectReason::BeforeFirstPage)
    } else if page > last_page {
        TransitionOutcome::Rejected(RejectReason::PastLastPage {
            total_pages: last_page,
        })
    } else {
        TransitionOutcome::Applied(params.with_page(page))
    }
}
