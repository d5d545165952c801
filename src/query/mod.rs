//! Query engine subsystem for lkpostal
//!
//! Turns a fixed record collection plus the session's query parameters into
//! a filtered result and a bounded page of it.
//!
//! # Evaluation (strict order)
//!
//! 1. Text predicate (office name, postal code, district)
//! 2. District predicate (exact match or "all")
//! 3. Office-type predicate (main, sub or "all")
//! 4. Pagination of the surviving records, source order preserved
//!
//! # Invariants
//!
//! - Filtering is a stable subsequence of the input; identical inputs give
//!   identical output
//! - Any filter change resets the page to 1 in the same transition
//! - Page moves outside `[1, max(1, total_pages)]` are rejected, never clamped
//! - Clearing filters resets all parameters in one step

mod engine;
mod filters;
mod paginate;
mod params;
mod transition;
mod view;

pub use engine::QueryEngine;
pub use filters::{filter_records, RecordFilter};
pub use paginate::{paginate, total_pages, Page};
pub use params::{DistrictFilter, FilterCriteria, QueryParams, TypeFilter, ALL, PAGE_SIZE};
pub use transition::{transition, QueryEvent, RejectReason, TransitionOutcome};
pub use view::{QueryView, ResultStatus};
