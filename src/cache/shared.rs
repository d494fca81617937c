//! Shared Cache Handle
//!
//! Thread-safe, cloneable handle over a [`CacheStore`], plus the process-wide
//! instance used by default.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, CacheStats, CacheStore};
use crate::geo::{Coordinate, PostalCode};

static GLOBAL_CACHE: Lazy<GeocodeCache> = Lazy::new(GeocodeCache::new);

// == Geocode Cache ==
/// Shared postal code to coordinate cache.
///
/// Clones share the same storage. Writes are single-key upserts, so
/// concurrent writers for the same key simply race to an equivalent value.
#[derive(Debug, Clone, Default)]
pub struct GeocodeCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl GeocodeCache {
    /// Creates an empty cache independent of the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache. Created empty on first use and never torn down.
    pub fn global() -> Self {
        GLOBAL_CACHE.clone()
    }

    pub async fn get(&self, postal_code: &PostalCode) -> Option<Coordinate> {
        self.inner.read().await.get(postal_code)
    }

    /// Returns whether the coordinate was stored (invalid ones are not).
    pub async fn set(&self, postal_code: PostalCode, coordinate: Coordinate) -> bool {
        self.inner.write().await.set(postal_code, coordinate)
    }

    pub async fn has(&self, postal_code: &PostalCode) -> bool {
        self.inner.read().await.has(postal_code)
    }

    pub async fn entry(&self, postal_code: &PostalCode) -> Option<CacheEntry> {
        self.inner.read().await.entry(postal_code).cloned()
    }

    /// Looks up several codes under one lock, returning only the hits.
    pub async fn get_many<'a, I>(&self, postal_codes: I) -> HashMap<PostalCode, Coordinate>
    where
        I: IntoIterator<Item = &'a PostalCode>,
    {
        let store = self.inner.read().await;
        postal_codes
            .into_iter()
            .filter_map(|code| store.get(code).map(|coord| (code.clone(), coord)))
            .collect()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    fn zip(s: &str) -> PostalCode {
        PostalCode::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let cache = GeocodeCache::new();
        let other = cache.clone();

        cache.set(zip("90210"), Coordinate::new(34.10, -118.41)).await;

        assert!(other.has(&zip("90210")).await);
        assert_eq!(
            other.get(&zip("90210")).await,
            Some(Coordinate::new(34.10, -118.41))
        );
    }

    #[tokio::test]
    async fn test_new_instances_are_independent() {
        let a = GeocodeCache::new();
        let b = GeocodeCache::new();

        a.set(zip("10001"), Coordinate::new(40.75, -73.99)).await;

        assert!(!b.has(&zip("10001")).await);
        assert!(b.is_empty().await);
    }

    #[tokio::test]
    async fn test_global_is_a_singleton() {
        let key = zip("global-singleton-test");
        GeocodeCache::global()
            .set(key.clone(), Coordinate::new(1.0, 2.0))
            .await;

        assert!(GeocodeCache::global().has(&key).await);
    }

    #[tokio::test]
    async fn test_get_many_returns_hits_only() {
        let cache = GeocodeCache::new();
        cache.set(zip("90210"), Coordinate::new(34.10, -118.41)).await;
        cache.set(zip("10001"), Coordinate::new(40.75, -73.99)).await;

        let codes = vec![zip("90210"), zip("00000"), zip("10001")];
        let hits = cache.get_many(&codes).await;

        assert_eq!(hits.len(), 2);
        assert!(!hits.contains_key(&zip("00000")));

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_reads_share_the_lock() {
        let cache = GeocodeCache::new();
        cache.set(zip("90210"), Coordinate::new(34.10, -118.41)).await;

        // A held read guard must not block other readers
        let held = cache.inner.read().await;
        let wait = Duration::from_secs(1);
        let hits = timeout(wait, cache.get_many([&zip("90210"), &zip("00000")]))
            .await
            .expect("get_many blocked behind a reader");
        let single = timeout(wait, cache.get(&zip("90210")))
            .await
            .expect("get blocked behind a reader");
        drop(held);

        assert_eq!(hits.len(), 1);
        assert_eq!(single, Some(Coordinate::new(34.10, -118.41)));

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_concurrent_writes_same_key() {
        let cache = GeocodeCache::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    cache.set(zip("30301"), Coordinate::new(33.75, -84.39)).await
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap());
        }

        assert_eq!(cache.len().await, 1);
        assert_eq!(
            cache.get(&zip("30301")).await,
            Some(Coordinate::new(33.75, -84.39))
        );
    }
}
