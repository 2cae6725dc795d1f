//! Progress persistence
//!
//! Features:
//! - Pluggable key-value backends (in-memory, one JSON file per key)
//! - Daily progress record keyed by day index
//! - Lifetime statistics

mod progress;
mod stats;
mod store;

pub use progress::{PersistedProgress, ProgressError};
pub use stats::Statistics;
pub use store::{FileStore, MemoryStore, PersistenceStore, StoreError};
