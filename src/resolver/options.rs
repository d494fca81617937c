//! Batch Options
//!
//! Chunk size, pacing and retry settings for the batch resolver.

use std::time::Duration;

use crate::config::Config;
use crate::error::{GeocodeError, Result};

/// Default number of concurrent lookups per chunk
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Default pause between chunks
pub const DEFAULT_INTER_BATCH_DELAY: Duration = Duration::from_millis(300);

/// Validated batch settings. `batch_size` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    batch_size: usize,
    inter_batch_delay: Duration,
    max_retries: usize,
}

impl BatchOptions {
    /// Fails with [`GeocodeError::InvalidConfig`] when `batch_size` is zero.
    pub fn new(batch_size: usize, inter_batch_delay: Duration) -> Result<Self> {
        if batch_size == 0 {
            return Err(GeocodeError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            batch_size,
            inter_batch_delay,
            max_retries: 0,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.batch_size, config.batch_delay())?.with_max_retries(config.max_retries))
    }

    /// Retries per failed lookup, applied only to retryable failures.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn inter_batch_delay(&self) -> Duration {
        self.inter_batch_delay
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            inter_batch_delay: DEFAULT_INTER_BATCH_DELAY,
            max_retries: 0,
        }
    }
}
