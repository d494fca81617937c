//! Geocoding service response DTOs
//!
//! Mirrors the zippopotam.us response body:
//!
//! ```json
//! {
//!   "post code": "90210",
//!   "country": "United States",
//!   "places": [
//!     { "place name": "Beverly Hills", "latitude": "34.0901", "longitude": "-118.4065", "state": "California" }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::geo::Coordinate;

/// Response body of a postal code lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    #[serde(rename = "post code", default)]
    pub post_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Matching places; required, an empty list means "no match"
    pub places: Vec<Place>,
}

/// One place matching a postal code. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub latitude: String,
    pub longitude: String,
    #[serde(rename = "place name", default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Place {
    /// Parsed coordinate, or `None` if either part is non-numeric or out of range.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::parse(&self.latitude, &self.longitude)
    }
}

impl PlacesResponse {
    /// Coordinate of the first place only; later places are ignored.
    pub fn first_coordinate(&self) -> Option<Coordinate> {
        self.places.first().and_then(Place::coordinate)
    }
}
