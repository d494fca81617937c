//! Zip Geocoder - postal code geocoding for record collections
//!
//! Fills in missing coordinates by postal code, with a process-wide cache and
//! batched, rate-limited lookups against an external geocoding service.

pub mod cache;
pub mod client;
pub mod config;
pub mod enrich;
pub mod error;
pub mod geo;
pub mod models;
pub mod resolver;
pub mod service;

pub use cache::GeocodeCache;
pub use client::{GeocodeClient, HttpGeocodeClient, LookupOutcome};
pub use config::Config;
pub use enrich::{filter_valid, Enricher, Geocodable};
pub use error::{GeocodeError, LookupFailure, Result};
pub use geo::{is_valid, Coordinate, PostalCode};
pub use resolver::{BatchOptions, BatchReport, BatchResolver, Resolution};
pub use service::Geocoder;
