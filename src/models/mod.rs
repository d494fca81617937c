//! Data models
//!
//! Wire DTOs of the geocoding service and the club records that get geocoded.

pub mod club;
pub mod places;

// Re-export commonly used types
pub use club::{Club, FavoriteClub};
pub use places::{Place, PlacesResponse};
