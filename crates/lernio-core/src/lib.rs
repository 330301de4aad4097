//! lernio-core
//!
//! Pure domain types, storage key conventions, and the first-run seed
//! catalogue. No I/O — this is the shared vocabulary of the Lernio system.

pub mod keys;
pub mod models;
pub mod seed;
