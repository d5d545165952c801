//! Observable events emitted by the dataset and query subsystems
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events in lkpostal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Dataset
    /// Dataset file deserialized
    DatasetLoaded,
    /// District index built
    IndexBuilt,
    /// Engine records swapped for a new dataset
    DatasetReplaced,

    // Query engine
    /// Filtered result recomputed
    FilterEvaluated,
    /// Filtered result reused from the memo
    FilterCacheHit,
    /// Event accepted and parameters updated
    TransitionApplied,
    /// Event rejected (out-of-range page move)
    TransitionRejected,
    /// All filters reset to defaults
    FiltersCleared,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::DatasetLoaded => "DATASET_LOADED",
            Event::IndexBuilt => "INDEX_BUILT",
            Event::DatasetReplaced => "DATASET_REPLACED",

            Event::FilterEvaluated => "FILTER_EVALUATED",
            Event::FilterCacheHit => "FILTER_CACHE_HIT",
            Event::TransitionApplied => "TRANSITION_APPLIED",
            Event::TransitionRejected => "TRANSITION_REJECTED",
            Event::FiltersCleared => "FILTERS_CLEARED",
        }
    }

    /// Severity used when the event is logged without an explicit level.
    ///
    /// Engine activity is TRACE so it stays quiet at the default threshold.
    pub fn severity(&self) -> Severity {
        match self {
            Event::IndexBuilt
            | Event::FilterEvaluated
            | Event::FilterCacheHit
            | Event::TransitionApplied
            | Event::TransitionRejected => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
