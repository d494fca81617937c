//! Configuration Module
//!
//! Handles loading and managing geocoder configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{GeocodeError, Result};

/// Default geocoding service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.zippopotam.us";

/// Geocoder configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the geocoding service
    pub base_url: String,
    /// Country segment of the lookup path
    pub country: String,
    /// Maximum number of concurrent lookups per batch
    pub batch_size: usize,
    /// Pause between consecutive batches in milliseconds
    pub batch_delay_ms: u64,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Retries for a failed lookup within one batch (0 disables retrying)
    pub max_retries: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `GEOCODE_BASE_URL` - Service base URL (default: https://api.zippopotam.us)
    /// - `GEOCODE_COUNTRY` - Country path segment (default: us)
    /// - `GEOCODE_BATCH_SIZE` - Lookups per batch (default: 5)
    /// - `GEOCODE_BATCH_DELAY_MS` - Delay between batches (default: 300)
    /// - `GEOCODE_TIMEOUT_MS` - Per-request timeout (default: 10000)
    /// - `GEOCODE_MAX_RETRIES` - Retries per failed lookup (default: 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("GEOCODE_BASE_URL").unwrap_or(defaults.base_url),
            country: env::var("GEOCODE_COUNTRY").unwrap_or(defaults.country),
            batch_size: parse_env("GEOCODE_BATCH_SIZE").unwrap_or(defaults.batch_size),
            batch_delay_ms: parse_env("GEOCODE_BATCH_DELAY_MS").unwrap_or(defaults.batch_delay_ms),
            timeout_ms: parse_env("GEOCODE_TIMEOUT_MS").unwrap_or(defaults.timeout_ms),
            max_retries: parse_env("GEOCODE_MAX_RETRIES").unwrap_or(defaults.max_retries),
        }
    }

    /// Rejects values that would make lookups impossible.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(GeocodeError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(GeocodeError::InvalidConfig(
                "timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(GeocodeError::InvalidConfig(
                "base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Inter-batch delay as a Duration.
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    /// Per-request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country: "us".to_string(),
            batch_size: 5,
            batch_delay_ms: 300,
            timeout_ms: 10_000,
            max_retries: 0,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching process env vars must not interleave
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 6] = [
        "GEOCODE_BASE_URL",
        "GEOCODE_COUNTRY",
        "GEOCODE_BATCH_SIZE",
        "GEOCODE_BATCH_DELAY_MS",
        "GEOCODE_TIMEOUT_MS",
        "GEOCODE_MAX_RETRIES",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.country, "us");
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.batch_delay_ms, 300);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.max_retries, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.batch_delay(), Duration::from_millis(300));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_env_unparseable_falls_back() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("GEOCODE_BATCH_SIZE", "abc");
        env::set_var("GEOCODE_TIMEOUT_MS", " 250 ");
        env::set_var("GEOCODE_BATCH_DELAY_MS", "-5");
        env::set_var("GEOCODE_MAX_RETRIES", "2");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.batch_size, 5);
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.batch_delay_ms, 300);
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_validate_rejects_zero_batch_size() {
        let config = Config {
            batch_size: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeocodeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
