//! Lookup retry
//!
//! Bounded exponential backoff around a single lookup using `backon`. Only
//! retryable failures (timeouts, transport errors, 429, 5xx) are retried;
//! not-found answers are final.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use tracing::debug;

use crate::client::{GeocodeClient, LookupOutcome};
use crate::error::LookupFailure;
use crate::geo::PostalCode;

/// Backoff for lookup retries.
///
/// - Min delay: 200ms
/// - Max delay: 2s
/// - Jitter enabled
pub fn lookup_backoff(max_retries: usize) -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(200))
        .with_max_delay(Duration::from_secs(2))
        .with_max_times(max_retries)
        .with_jitter()
}

/// Resolves one postal code, retrying retryable failures up to `max_retries` times.
pub async fn resolve_with_retry(
    client: &dyn GeocodeClient,
    postal_code: &PostalCode,
    max_retries: usize,
) -> LookupOutcome {
    if max_retries == 0 {
        return client.resolve(postal_code).await;
    }

    let result = (|| async {
        match client.resolve(postal_code).await {
            LookupOutcome::Failed(failure) => Err(failure),
            outcome => Ok(outcome),
        }
    })
    .retry(lookup_backoff(max_retries))
    .when(LookupFailure::is_retryable)
    .notify(|err: &LookupFailure, dur: Duration| {
        debug!(postal_code = %postal_code, error = %err, delay = ?dur, "Lookup failed, retrying");
    })
    .await;

    result.unwrap_or_else(LookupOutcome::Failed)
}
