//! Coordinate Module
//!
//! Latitude/longitude pairs and the range predicate that decides whether a
//! pair counts as a coordinate at all.

use serde::{Deserialize, Serialize};

// == Public Constants ==
/// Largest absolute latitude in degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest absolute longitude in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

// == Coordinate ==
/// A resolved `(latitude, longitude)` pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checking.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate only if it passes [`is_valid`].
    pub fn new_checked(latitude: f64, longitude: f64) -> Option<Self> {
        is_valid(latitude, longitude).then(|| Self::new(latitude, longitude))
    }

    /// Coerces both parts and creates a coordinate if the result is valid.
    ///
    /// Accepts anything [`is_valid`] accepts, e.g. the string-typed fields of
    /// a geocoding response.
    pub fn parse<L: AsDegrees, G: AsDegrees>(latitude: L, longitude: G) -> Option<Self> {
        let lat = latitude.as_degrees()?;
        let lng = longitude.as_degrees()?;
        Self::new_checked(lat, lng)
    }

    pub fn is_valid(&self) -> bool {
        is_valid(self.latitude, self.longitude)
    }
}

// == Degree Coercion ==
/// Values that can be coerced to a number of degrees.
///
/// Numbers pass through, strings are trimmed and parsed, `None` and
/// non-numeric JSON values coerce to nothing.
pub trait AsDegrees {
    fn as_degrees(&self) -> Option<f64>;
}

impl AsDegrees for f64 {
    fn as_degrees(&self) -> Option<f64> {
        Some(*self)
    }
}

impl AsDegrees for f32 {
    fn as_degrees(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsDegrees for i32 {
    fn as_degrees(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsDegrees for i64 {
    fn as_degrees(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl AsDegrees for str {
    fn as_degrees(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse().ok()
    }
}

impl AsDegrees for String {
    fn as_degrees(&self) -> Option<f64> {
        self.as_str().as_degrees()
    }
}

impl AsDegrees for serde_json::Value {
    fn as_degrees(&self) -> Option<f64> {
        match self {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.as_degrees(),
            _ => None,
        }
    }
}

impl<T: AsDegrees> AsDegrees for Option<T> {
    fn as_degrees(&self) -> Option<f64> {
        self.as_ref().and_then(AsDegrees::as_degrees)
    }
}

impl<T: AsDegrees + ?Sized> AsDegrees for &T {
    fn as_degrees(&self) -> Option<f64> {
        (**self).as_degrees()
    }
}

// == Validator ==
/// Returns true iff both values coerce to finite numbers with
/// `|lat| <= 90` and `|lng| <= 180`.
///
/// Total: absent or non-numeric input is simply invalid.
pub fn is_valid<L: AsDegrees, G: AsDegrees>(latitude: L, longitude: G) -> bool {
    match (latitude.as_degrees(), longitude.as_degrees()) {
        (Some(lat), Some(lng)) => {
            lat.is_finite()
                && lng.is_finite()
                && lat.abs() <= MAX_LATITUDE
                && lng.abs() <= MAX_LONGITUDE
        }
        _ => false,
    }
}

// == Bounding Center ==
/// Midpoint of the bounding box spanned by the valid coordinates.
///
/// Invalid entries are skipped; returns `None` when nothing valid remains.
pub fn bounding_center<I>(coordinates: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut bounds: Option<(f64, f64, f64, f64)> = None;

    for c in coordinates.into_iter().filter(Coordinate::is_valid) {
        let (min_lat, max_lat, min_lng, max_lng) =
            bounds.get_or_insert((c.latitude, c.latitude, c.longitude, c.longitude));
        *min_lat = min_lat.min(c.latitude);
        *max_lat = max_lat.max(c.latitude);
        *min_lng = min_lng.min(c.longitude);
        *max_lng = max_lng.max(c.longitude);
    }

    bounds.map(|(min_lat, max_lat, min_lng, max_lng)| {
        Coordinate::new((min_lat + max_lat) / 2.0, (min_lng + max_lng) / 2.0)
    })
}
