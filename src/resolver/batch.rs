//! Batch Resolver
//!
//! Resolves many postal codes at once: deduplicate, serve what the cache
//! already knows, and look up the rest in chunks of at most `batch_size`
//! concurrent requests. Chunks run one after another with a pause in
//! between to stay under the service's rate limit.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::cache::GeocodeCache;
use crate::client::{GeocodeClient, LookupOutcome};
use crate::error::LookupFailure;
use crate::geo::{Coordinate, PostalCode};
use crate::resolver::retry::resolve_with_retry;
use crate::resolver::BatchOptions;

// == Resolution ==
/// How a single postal code fared in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Served from the cache without a network call
    Cached(Coordinate),
    /// Looked up and written to the cache
    Fetched(Coordinate),
    /// The service has no valid place for the code
    NotFound,
    /// The lookup failed; eligible for retry on a later call
    Failed(LookupFailure),
}

impl Resolution {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Resolution::Cached(coord) | Resolution::Fetched(coord) => Some(*coord),
            Resolution::NotFound | Resolution::Failed(_) => None,
        }
    }
}

// == Batch Report ==
/// Per-code outcome of a batch, in first-seen input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    resolutions: Vec<(PostalCode, Resolution)>,
    batches: usize,
}

impl BatchReport {
    /// Number of chunks that were executed.
    pub fn batches(&self) -> usize {
        self.batches
    }

    pub fn resolutions(&self) -> &[(PostalCode, Resolution)] {
        &self.resolutions
    }

    pub fn get(&self, postal_code: &PostalCode) -> Option<&Resolution> {
        self.resolutions
            .iter()
            .find(|(code, _)| code == postal_code)
            .map(|(_, resolution)| resolution)
    }

    /// Resolved coordinates only; not-found and failed codes are absent.
    pub fn coordinates(&self) -> HashMap<PostalCode, Coordinate> {
        self.resolutions
            .iter()
            .filter_map(|(code, resolution)| resolution.coordinate().map(|c| (code.clone(), c)))
            .collect()
    }

    pub fn failed(&self) -> impl Iterator<Item = (&PostalCode, &LookupFailure)> {
        self.resolutions.iter().filter_map(|(code, resolution)| match resolution {
            Resolution::Failed(failure) => Some((code, failure)),
            _ => None,
        })
    }

    pub fn not_found(&self) -> impl Iterator<Item = &PostalCode> {
        self.resolutions
            .iter()
            .filter(|(_, resolution)| *resolution == Resolution::NotFound)
            .map(|(code, _)| code)
    }
}

// == Batch Resolver ==
/// Cached, chunked, rate-limited postal code resolution.
#[derive(Clone)]
pub struct BatchResolver {
    client: Arc<dyn GeocodeClient>,
    cache: GeocodeCache,
    options: BatchOptions,
}

impl BatchResolver {
    pub fn new(client: Arc<dyn GeocodeClient>, cache: GeocodeCache, options: BatchOptions) -> Self {
        Self {
            client,
            cache,
            options,
        }
    }

    pub fn cache(&self) -> &GeocodeCache {
        &self.cache
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Resolves the codes with the resolver's default options.
    ///
    /// Codes that could not be resolved, for whatever reason, are absent from
    /// the returned map.
    pub async fn resolve_batch(
        &self,
        postal_codes: &[PostalCode],
    ) -> HashMap<PostalCode, Coordinate> {
        self.resolve_batch_detailed(postal_codes, &self.options)
            .await
            .coordinates()
    }

    /// Same as [`resolve_batch`](Self::resolve_batch) with per-call options.
    pub async fn resolve_batch_with(
        &self,
        postal_codes: &[PostalCode],
        options: &BatchOptions,
    ) -> HashMap<PostalCode, Coordinate> {
        self.resolve_batch_detailed(postal_codes, options)
            .await
            .coordinates()
    }

    /// Resolves the codes and reports how each one was handled.
    pub async fn resolve_batch_detailed(
        &self,
        postal_codes: &[PostalCode],
        options: &BatchOptions,
    ) -> BatchReport {
        let unique = dedup_preserving_order(postal_codes);
        let mut report = BatchReport {
            resolutions: Vec::with_capacity(unique.len()),
            batches: 0,
        };

        if unique.is_empty() {
            return report;
        }

        let total_chunks = unique.len().div_ceil(options.batch_size());
        debug!(
            codes = unique.len(),
            chunks = total_chunks,
            batch_size = options.batch_size(),
            "Resolving postal codes"
        );

        for (index, chunk) in unique.chunks(options.batch_size()).enumerate() {
            if index > 0 && !options.inter_batch_delay().is_zero() {
                tokio::time::sleep(options.inter_batch_delay()).await;
            }

            let resolved = self.resolve_chunk(chunk, options).await;
            report.resolutions.extend(resolved);
            report.batches += 1;
        }

        let resolved = report.coordinates().len();
        let failed = report.failed().count();
        if failed > 0 {
            info!(
                resolved,
                failed,
                total = report.resolutions.len(),
                "Postal code batch finished with failures"
            );
        } else {
            debug!(resolved, total = report.resolutions.len(), "Postal code batch finished");
        }

        report
    }

    /// Resolves a single code, consulting the cache first.
    pub async fn resolve_one(&self, postal_code: &PostalCode) -> Option<Coordinate> {
        let report = self
            .resolve_batch_detailed(std::slice::from_ref(postal_code), &self.options)
            .await;
        report.get(postal_code).and_then(Resolution::coordinate)
    }

    async fn resolve_chunk(
        &self,
        chunk: &[PostalCode],
        options: &BatchOptions,
    ) -> Vec<(PostalCode, Resolution)> {
        let cached = self.cache.get_many(chunk).await;

        let lookups = chunk
            .iter()
            .filter(|code| !cached.contains_key(*code))
            .map(|code| async move {
                let outcome =
                    resolve_with_retry(self.client.as_ref(), code, options.max_retries()).await;
                (code, outcome)
            });
        let mut fetched: HashMap<&PostalCode, LookupOutcome> =
            join_all(lookups).await.into_iter().collect();

        let mut resolutions = Vec::with_capacity(chunk.len());
        for code in chunk {
            let resolution = if let Some(coord) = cached.get(code) {
                Resolution::Cached(*coord)
            } else {
                match fetched.remove(code) {
                    Some(LookupOutcome::Found(coord)) => {
                        self.cache.set(code.clone(), coord).await;
                        Resolution::Fetched(coord)
                    }
                    Some(LookupOutcome::Failed(failure)) => {
                        warn!(postal_code = %code, error = %failure, "Geocode lookup failed");
                        Resolution::Failed(failure)
                    }
                    Some(LookupOutcome::NotFound) | None => Resolution::NotFound,
                }
            };
            resolutions.push((code.clone(), resolution));
        }

        resolutions
    }
}

/// Removes duplicates, keeping the first occurrence of each code.
fn dedup_preserving_order(postal_codes: &[PostalCode]) -> Vec<PostalCode> {
    let mut seen = HashSet::with_capacity(postal_codes.len());
    postal_codes
        .iter()
        .filter(|code| seen.insert(*code))
        .cloned()
        .collect()
}
