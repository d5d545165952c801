//! Observability subsystem for lkpostal
//!
//! Provides:
//! - Structured logging (one JSON object per line, stderr)
//! - Query engine counters
//! - Typed lifecycle events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. No background threads
//! 4. Deterministic output (fields sorted by key)
//!
//! # Usage
//!
//! ```ignore
//! use lkpostal::observability::{log_event_with_fields, Event, QueryMetrics};
//!
//! log_event_with_fields(Event::DatasetLoaded, &[("records", "42")]);
//!
//! let metrics = QueryMetrics::new();
//! metrics.increment_evaluations();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, QueryMetrics};

/// Log a lifecycle event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
