//! Club records
//!
//! Golf club records as returned by the club search API, and favorites that
//! wrap them. Both can be geocoded.

use serde::{Deserialize, Deserializer, Serialize};

use crate::enrich::Geocodable;
use crate::geo::{AsDegrees, Coordinate};

/// A golf club. Coordinates may be missing, out of range, or arrive as
/// strings; they are coerced to numbers on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: String,
    pub club_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default, deserialize_with = "deserialize_degrees")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_degrees")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

impl Geocodable for Club {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.latitude?, self.longitude?))
    }

    fn postal_code(&self) -> Option<&str> {
        Some(self.zip_code.as_str()).filter(|zip| !zip.trim().is_empty())
    }

    fn with_coordinate(&self, coordinate: Option<Coordinate>) -> Self {
        Self {
            latitude: coordinate.map(|c| c.latitude),
            longitude: coordinate.map(|c| c.longitude),
            ..self.clone()
        }
    }
}

/// A club saved as a favorite by a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteClub {
    pub golfclub_id: String,
    #[serde(default)]
    pub profile_id: Option<String>,
    pub golfclub: Club,
}

impl Geocodable for FavoriteClub {
    type Id = String;

    fn id(&self) -> String {
        self.golfclub_id.clone()
    }

    fn coordinate(&self) -> Option<Coordinate> {
        self.golfclub.coordinate()
    }

    fn postal_code(&self) -> Option<&str> {
        self.golfclub.postal_code()
    }

    fn with_coordinate(&self, coordinate: Option<Coordinate>) -> Self {
        Self {
            golfclub: self.golfclub.with_coordinate(coordinate),
            ..self.clone()
        }
    }
}

/// Accepts numbers, numeric strings and `null`; anything else becomes `None`.
fn deserialize_degrees<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_degrees())
}
