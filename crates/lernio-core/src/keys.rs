//! Storage key conventions.
//!
//! Pure string constants — no store dependency. These define the canonical
//! layout of the persisted Lernio state: two independent keys, written
//! separately (there is no cross-key transaction).

/// The full lesson catalogue, in insertion order.
pub const LESSONS: &str = "lessons";

/// The completion timeline, in completion order.
pub const TIMELINE: &str = "timeline";
