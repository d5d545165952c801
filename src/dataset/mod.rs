//! Dataset subsystem for lkpostal
//!
//! The postal-code records are loaded once and never mutated afterwards.
//! Everything derived from them (the district index, filtered views) is
//! rebuilt from the records, never the other way round.
//!
//! # Invariants
//!
//! - Record order is source order
//! - District index is deduplicated and sorted ascending (byte-wise)

mod errors;
mod index;
mod loader;
mod record;

pub use errors::{DatasetError, DatasetResult};
pub use index::{build_index, DatasetIndex};
pub use loader::{load_records, parse_records};
pub use record::Record;
