//! Geodesy
//!
//! Coordinate type and great-circle distance on the WGS84 ellipsoid.

mod distance;

pub use distance::{distance_km, METERS_PER_KM};

use serde::{Deserialize, Serialize};

/// A point in geographic coordinate space (degrees, WGS84 convention).
///
/// No range checking happens here; callers that accept user input go through
/// `data-validator` first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Geodesic distance to `other` in kilometres
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
