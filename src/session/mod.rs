//! Shared session for multi-threaded hosts
//!
//! The engine itself is single-threaded. When several threads need the same
//! session, [`SharedSession`] serializes all events through one write lock,
//! so readers observe parameters either before or after an event, never in
//! between (a `clear_filters` is seen as one step).

use std::sync::{Arc, PoisonError, RwLock};

use crate::dataset::Record;
use crate::query::{QueryEngine, QueryEvent, QueryParams, TransitionOutcome};

/// Cloneable handle to one engine behind a single-writer lock
#[derive(Debug, Clone)]
pub struct SharedSession {
    engine: Arc<RwLock<QueryEngine>>,
}

impl SharedSession {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }

    /// Applies one event under the write lock
    pub fn dispatch(&self, event: QueryEvent) -> TransitionOutcome {
        // A panicked holder cannot leave the engine half-updated: dispatch
        // swaps parameters in a single assignment.
        let mut engine = self.engine.write().unwrap_or_else(PoisonError::into_inner);
        engine.dispatch(event)
    }

    /// Swaps the record collection under the write lock
    pub fn replace_records(&self, records: Vec<Record>) {
        let mut engine = self.engine.write().unwrap_or_else(PoisonError::into_inner);
        engine.replace_records(records);
    }

    /// Copy of the current parameters
    pub fn params(&self) -> QueryParams {
        self.read(|engine| engine.params().clone())
    }

    /// Runs `f` against a consistent view of the engine
    pub fn read<R>(&self, f: impl FnOnce(&QueryEngine) -> R) -> R {
        let engine = self.engine.read().unwrap_or_else(PoisonError::into_inner);
        f(&engine)
    }
}
