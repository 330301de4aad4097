//! lernio-recommend
//!
//! Heuristic lesson ranking. Pure functions over the in-memory
//! catalogue: no I/O, no persisted scores, no learned model.

pub mod keywords;
pub mod rank;

pub use rank::{MAX_RECOMMENDATIONS, recommend};
