//! Geo Module
//!
//! Coordinates, their validity predicate, and postal-code keys.

mod coordinate;
mod postal;

pub use coordinate::{bounding_center, is_valid, AsDegrees, Coordinate, MAX_LATITUDE, MAX_LONGITUDE};
pub use postal::PostalCode;
