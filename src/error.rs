//! Error types for the geocoder
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Lookup Failure Enum ==
/// Transport or decoding failure of a single geocoding lookup.
///
/// Never escapes the geocode client as an `Err`; it travels inside
/// [`LookupOutcome::Failed`](crate::client::LookupOutcome) so batch
/// orchestration can carry on past it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Request did not complete within the configured timeout
    #[error("Lookup timed out")]
    Timeout,

    /// Service answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Connection or other transport error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl LookupFailure {
    /// Returns true if a later attempt could plausibly succeed.
    ///
    /// Timeouts, transport errors, 429 and 5xx statuses are retryable.
    /// Decode errors and other 4xx statuses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            LookupFailure::Timeout | LookupFailure::Transport(_) => true,
            LookupFailure::Status(code) => *code == 429 || (500..600).contains(code),
            LookupFailure::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for LookupFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupFailure::Timeout
        } else if err.is_decode() {
            LookupFailure::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            LookupFailure::Status(status.as_u16())
        } else {
            LookupFailure::Transport(err.to_string())
        }
    }
}

// == Geocode Error Enum ==
/// Configuration-time errors.
///
/// These are the only errors the crate returns; lookups themselves degrade to
/// "no coordinate" instead.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// Invalid option value (e.g. zero batch size)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client could not be constructed
    #[error("Client setup failed: {0}")]
    Client(String),
}

// == Result Type Alias ==
/// Convenience Result type for the geocoder.
pub type Result<T> = std::result::Result<T, GeocodeError>;
