//! Cache Module
//!
//! Provides the in-memory postal code to coordinate cache. Entries live for
//! the lifetime of the process; failed lookups are never cached.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::GeocodeCache;
pub use stats::{CacheCounters, CacheStats};
pub use store::CacheStore;
