//! Ellipsoidal Geodesic Distance
//!
//! Solves the inverse geodesic problem with Karney's algorithm, which stays
//! accurate (and convergent) for nearly antipodal pairs where Vincenty's
//! iteration breaks down.

use crate::Coordinate;
use geographiclib_rs::{Geodesic, InverseGeodesic};
use std::sync::OnceLock;

/// Metres in a kilometre
pub const METERS_PER_KM: f64 = 1000.0;

fn wgs84() -> &'static Geodesic {
    static WGS84: OnceLock<Geodesic> = OnceLock::new();
    WGS84.get_or_init(Geodesic::wgs84)
}

/// Distance between two coordinates along the WGS84 ellipsoid, in kilometres.
///
/// Pure and symmetric. Identical points yield `0.0`. For any pair of in-range
/// coordinates the result is finite and non-negative.
///
/// # Example
///
/// ```
/// use geodesy::{distance_km, Coordinate};
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// let la = Coordinate::new(34.0522, -118.2437);
/// let d = distance_km(nyc, la);
/// assert!(d > 3900.0 && d < 4000.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let meters: f64 = wgs84().inverse(a.latitude, a.longitude, b.latitude, b.longitude);
    meters.abs() / METERS_PER_KM
}
