//! Cache Statistics Module
//!
//! Lookup accounting for the geocode cache. Counters are atomic so that
//! reads can be counted while holding only a shared lock on the store;
//! [`CacheStats`] is a plain snapshot handed out to callers.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Counters ==
/// Live hit/miss/insert counters owned by the store.
#[derive(Debug, Default)]
pub struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
}

impl CacheCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy; `total_entries` comes from the store.
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Snapshot ==
/// Cache usage as seen at one moment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Postal codes answered from the cache
    pub hits: u64,
    /// Postal codes that had to go to the geocoding service
    pub misses: u64,
    /// Coordinates written, overwrites included
    pub inserts: u64,
    /// Postal codes currently cached
    pub total_entries: usize,
}

impl CacheStats {
    /// Share of cache reads that avoided a network lookup, 0.0 before any read.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            reads => self.hits as f64 / reads as f64,
        }
    }
}
