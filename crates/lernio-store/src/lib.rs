//! lernio-store
//!
//! Best-effort local key-value persistence. One JSON file per key under a
//! data directory; reads fall back to a caller-supplied default, writes
//! are logged-and-swallowed on failure. The in-memory state held by the
//! caller stays authoritative for the session either way.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::LocalStore;
