//! lkpostal - Sri Lankan postal code lookup
//!
//! An in-memory query engine over a fixed postal-code dataset: free-text
//! search, district and office-type filters, and paginated results.

pub mod cli;
pub mod dataset;
pub mod observability;
pub mod query;
pub mod session;
