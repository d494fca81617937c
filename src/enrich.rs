//! Record Enricher
//!
//! Fills in missing coordinates on any record type that exposes an id, an
//! optional coordinate and an optional postal code. Output has the same
//! length and order as the input; records are copied, never mutated.

use std::fmt;

use tracing::{debug, trace};

use crate::geo::{Coordinate, PostalCode};
use crate::resolver::{BatchOptions, BatchResolver};

// == Geocodable ==
/// Capability of a record that can be placed on a map.
pub trait Geocodable: Sized {
    type Id: fmt::Display;

    fn id(&self) -> Self::Id;

    /// Raw coordinate as stored on the record; may be out of range.
    fn coordinate(&self) -> Option<Coordinate>;

    fn postal_code(&self) -> Option<&str>;

    /// Copy of the record with its coordinate replaced (`None` clears it).
    fn with_coordinate(&self, coordinate: Option<Coordinate>) -> Self;

    /// The coordinate if it passes the range check.
    fn valid_coordinate(&self) -> Option<Coordinate> {
        self.coordinate().filter(Coordinate::is_valid)
    }
}

/// What enrichment will do with one record.
#[derive(Debug, Clone, PartialEq)]
enum Plan {
    AlreadyValid,
    Resolve(PostalCode),
    Unresolvable,
}

fn plan_for<R: Geocodable>(record: &R) -> Plan {
    if record.valid_coordinate().is_some() {
        return Plan::AlreadyValid;
    }
    match record.postal_code().and_then(PostalCode::parse) {
        Some(code) => Plan::Resolve(code),
        None => Plan::Unresolvable,
    }
}

// == Enricher ==
/// Sole entry point for callers holding records that may lack coordinates.
#[derive(Clone)]
pub struct Enricher {
    resolver: BatchResolver,
}

impl Enricher {
    pub fn new(resolver: BatchResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &BatchResolver {
        &self.resolver
    }

    /// Enriches records using the resolver's default batch options.
    pub async fn enrich<R: Geocodable + Clone>(&self, records: &[R]) -> Vec<R> {
        self.enrich_with(records, self.resolver.options()).await
    }

    /// Enriches records with per-call batch options.
    ///
    /// * valid coordinate: returned unchanged
    /// * postal code present: coordinate filled in, or cleared if unresolvable
    /// * neither: coordinate cleared, including half-filled pairs
    pub async fn enrich_with<R: Geocodable + Clone>(
        &self,
        records: &[R],
        options: &BatchOptions,
    ) -> Vec<R> {
        let plans: Vec<Plan> = records.iter().map(plan_for).collect();

        let needed: Vec<PostalCode> = plans
            .iter()
            .filter_map(|plan| match plan {
                Plan::Resolve(code) => Some(code.clone()),
                _ => None,
            })
            .collect();

        let resolved = if needed.is_empty() {
            Default::default()
        } else {
            self.resolver.resolve_batch_with(&needed, options).await
        };

        debug!(
            records = records.len(),
            needing_lookup = needed.len(),
            resolved = resolved.len(),
            "Enriched records"
        );

        records
            .iter()
            .zip(plans)
            .map(|(record, plan)| match plan {
                Plan::AlreadyValid => record.clone(),
                Plan::Resolve(code) => {
                    let coordinate = resolved.get(&code).copied();
                    if coordinate.is_none() {
                        trace!(id = %record.id(), postal_code = %code, "Coordinate unavailable");
                    }
                    record.with_coordinate(coordinate)
                }
                // half-filled or out-of-range pairs are cleared, not passed on
                Plan::Unresolvable => record.with_coordinate(None),
            })
            .collect()
    }

    /// Coordinate for a single record: its own if valid, else its postal
    /// code's, else `None`.
    pub async fn locate<R: Geocodable>(&self, record: &R) -> Option<Coordinate> {
        match plan_for(record) {
            Plan::AlreadyValid => record.valid_coordinate(),
            Plan::Resolve(code) => self.resolver.resolve_one(&code).await,
            Plan::Unresolvable => None,
        }
    }
}

/// Records whose coordinate passes the range check.
pub fn filter_valid<R: Geocodable + Clone>(records: &[R]) -> Vec<R> {
    records
        .iter()
        .filter(|record| record.valid_coordinate().is_some())
        .cloned()
        .collect()
}
