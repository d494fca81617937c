//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use chrono::{DateTime, Utc};

use crate::geo::Coordinate;

// == Cache Entry ==
/// A resolved coordinate and when it was resolved.
///
/// Entries never expire; the timestamp is kept for debugging and statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    /// The resolved coordinate
    pub coordinate: Coordinate,
    /// When the lookup that produced this entry completed
    pub resolved_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            resolved_at: Utc::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was resolved.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.resolved_at
    }
}
