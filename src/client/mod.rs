//! Client Module
//!
//! Single postal code lookups against the external geocoding service.
//!
//! A lookup never fails with an `Err`: transport and decoding problems come
//! back as [`LookupOutcome::Failed`] so that batch orchestration can keep
//! going. Clients never write to the cache.

pub mod http;

use async_trait::async_trait;

use crate::error::LookupFailure;
use crate::geo::{Coordinate, PostalCode};

pub use http::HttpGeocodeClient;

/// Result of looking up one postal code.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// First matching place, already validated
    Found(Coordinate),
    /// The service knows no (valid) place for this code
    NotFound,
    /// Transport, status or decoding failure
    Failed(LookupFailure),
}

impl LookupOutcome {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            LookupOutcome::Found(coord) => Some(*coord),
            _ => None,
        }
    }
}

/// Resolves a postal code to a coordinate.
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    async fn resolve(&self, postal_code: &PostalCode) -> LookupOutcome;
}
