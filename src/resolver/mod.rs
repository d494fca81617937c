//! Resolver Module
//!
//! Batched, cached and paced postal code resolution on top of a
//! [`GeocodeClient`](crate::client::GeocodeClient).

mod batch;
mod options;
mod retry;

pub use batch::{BatchReport, BatchResolver, Resolution};
pub use options::{BatchOptions, DEFAULT_BATCH_SIZE, DEFAULT_INTER_BATCH_DELAY};
pub use retry::{lookup_backoff, resolve_with_retry};
