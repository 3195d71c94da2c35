use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;
use crate::Result;

/// A rectangular latitude/longitude range used for point generation
///
/// Plain min/max on both axes; generation ranges never span the
/// antimeridian, so no wraparound handling is needed here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngRange {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

/// Generates `n` independent, uniformly distributed points within `range`.
///
/// Pure function of `n`, the range and the rng state; pass a seeded rng for
/// deterministic output. Fails with
/// [`FitError::InvalidCoordinate`](crate::FitError::InvalidCoordinate) if the
/// range itself reaches outside valid coordinates.
pub fn random_points<R: Rng + ?Sized>(
    n: usize,
    range: &LatLngRange,
    rng: &mut R,
) -> Result<Vec<GeoPoint>> {
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let lat = rng.gen_range(range.south..=range.north);
        let lng = rng.gen_range(range.west..=range.east);
        points.push(GeoPoint::new(lat, lng)?);
    }
    Ok(points)
}
