//! Geocoder Service
//!
//! Wires configuration, the HTTP client, the shared cache and the batch
//! resolver into one handle for callers.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::cache::{CacheStats, GeocodeCache};
use crate::client::{GeocodeClient, HttpGeocodeClient};
use crate::config::Config;
use crate::enrich::{Enricher, Geocodable};
use crate::error::Result;
use crate::geo::{Coordinate, PostalCode};
use crate::resolver::{BatchOptions, BatchReport, BatchResolver};

/// Cloneable geocoding handle shared across callers.
#[derive(Clone)]
pub struct Geocoder {
    enricher: Enricher,
}

impl Geocoder {
    /// Creates a geocoder backed by the HTTP client and the process-wide cache.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = HttpGeocodeClient::from_config(config)?;
        let options = BatchOptions::from_config(config)?;
        info!(
            base_url = %config.base_url,
            country = %config.country,
            batch_size = options.batch_size(),
            batch_delay_ms = config.batch_delay_ms,
            "Geocoder initialized"
        );

        Ok(Self::with_client(
            Arc::new(client),
            GeocodeCache::global(),
            options,
        ))
    }

    /// Creates a geocoder from explicit parts.
    pub fn with_client(
        client: Arc<dyn GeocodeClient>,
        cache: GeocodeCache,
        options: BatchOptions,
    ) -> Self {
        Self {
            enricher: Enricher::new(BatchResolver::new(client, cache, options)),
        }
    }

    pub async fn enrich<R: Geocodable + Clone>(&self, records: &[R]) -> Vec<R> {
        self.enricher.enrich(records).await
    }

    pub async fn enrich_with<R: Geocodable + Clone>(
        &self,
        records: &[R],
        options: &BatchOptions,
    ) -> Vec<R> {
        self.enricher.enrich_with(records, options).await
    }

    pub async fn locate<R: Geocodable>(&self, record: &R) -> Option<Coordinate> {
        self.enricher.locate(record).await
    }

    pub async fn resolve_batch(
        &self,
        postal_codes: &[PostalCode],
    ) -> HashMap<PostalCode, Coordinate> {
        self.resolver().resolve_batch(postal_codes).await
    }

    pub async fn resolve_batch_detailed(
        &self,
        postal_codes: &[PostalCode],
        options: &BatchOptions,
    ) -> BatchReport {
        self.resolver()
            .resolve_batch_detailed(postal_codes, options)
            .await
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.resolver().cache().stats().await
    }

    pub fn cache(&self) -> &GeocodeCache {
        self.resolver().cache()
    }

    fn resolver(&self) -> &BatchResolver {
        self.enricher.resolver()
    }
}
