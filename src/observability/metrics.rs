//! Query engine counters
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only when the engine is created

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters kept by one query engine
#[derive(Debug, Default)]
pub struct QueryMetrics {
    /// Filtered result recomputations
    evaluations: AtomicU64,
    /// Filter requests served from the memo
    cache_hits: AtomicU64,
    /// Events that changed the parameters
    transitions_applied: AtomicU64,
    /// Events rejected as out of range
    transitions_rejected: AtomicU64,
    /// Clear-filters actions
    filters_cleared: AtomicU64,
}

impl QueryMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_evaluations(&self) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_cache_hits(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_transitions_applied(&self) {
        self.transitions_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_transitions_rejected(&self) {
        self.transitions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_filters_cleared(&self) {
        self.filters_cleared.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            transitions_applied: self.transitions_applied.load(Ordering::Relaxed),
            transitions_rejected: self.transitions_rejected.load(Ordering::Relaxed),
            filters_cleared: self.filters_cleared.load(Ordering::Relaxed),
        }
    }
}

/// Serializable snapshot of [`QueryMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub evaluations: u64,
    pub cache_hits: u64,
    pub transitions_applied: u64,
    pub transitions_rejected: u64,
    pub filters_cleared: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        assert_eq!(QueryMetrics::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_increments() {
        let metrics = QueryMetrics::new();
        metrics.increment_evaluations();
        metrics.increment_evaluations();
        metrics.increment_cache_hits();
        metrics.increment_transitions_rejected();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.evaluations, 2);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.transitions_applied, 0);
        assert_eq!(snapshot.transitions_rejected, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = QueryMetrics::new();
        metrics.increment_filters_cleared();

        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["filters_cleared"], 1);
    }
}
