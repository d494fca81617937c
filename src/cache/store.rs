//! Cache Store Module
//!
//! Postal code to coordinate map with hit/miss accounting. No TTL, no
//! eviction and no negative entries.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheCounters, CacheEntry, CacheStats};
use crate::geo::{Coordinate, PostalCode};

// == Cache Store ==
/// Unsynchronized cache storage; see [`GeocodeCache`](crate::cache::GeocodeCache)
/// for the shared handle.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Resolved coordinates keyed by postal code
    entries: HashMap<PostalCode, CacheEntry>,
    /// Hit/miss/insert accounting
    counters: CacheCounters,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Upserts the coordinate for a postal code.
    ///
    /// Invalid coordinates count as absent and are not stored; returns
    /// whether the value was written.
    pub fn set(&mut self, postal_code: PostalCode, coordinate: Coordinate) -> bool {
        if !coordinate.is_valid() {
            debug!(postal_code = %postal_code, ?coordinate, "Ignoring invalid coordinate");
            return false;
        }

        self.entries.insert(postal_code, CacheEntry::new(coordinate));
        self.counters.record_insert();
        true
    }

    // == Get ==
    /// Retrieves the coordinate for a postal code, recording a hit or miss.
    ///
    /// Takes `&self`: the counters are atomic, so shared readers can count.
    pub fn get(&self, postal_code: &PostalCode) -> Option<Coordinate> {
        match self.entries.get(postal_code) {
            Some(entry) => {
                self.counters.record_hit();
                Some(entry.coordinate)
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Checks presence without touching the statistics.
    pub fn has(&self, postal_code: &PostalCode) -> bool {
        self.entries.contains_key(postal_code)
    }

    // == Entry ==
    /// Full entry including the resolution timestamp.
    pub fn entry(&self, postal_code: &PostalCode) -> Option<&CacheEntry> {
        self.entries.get(postal_code)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
