use serde::{Deserialize, Serialize};

use crate::{FitError, Result};

/// Represents a geographical coordinate with latitude and longitude
///
/// Construction is validated: a latitude outside `[-90, 90]` or a longitude
/// outside `[-180, 180]` is rejected with [`FitError::InvalidCoordinate`],
/// never clamped. An existing `GeoPoint` is therefore always in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint, validating the coordinate ranges
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(FitError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Minimal bounding region over a non-empty set of geographical points
///
/// Latitude is a plain min/max band. Longitude is the smallest arc covering
/// every input longitude, so a point set straddling the antimeridian fits
/// the short way round; `west > east` encodes an arc crossing ±180°.
///
/// There is no empty `Region`: [`Region::from_points`] fails with
/// [`FitError::EmptyMarkerSet`] instead of producing a degenerate value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    south: f64,
    north: f64,
    west: f64,
    east: f64,
}

impl Region {
    /// Computes the minimal region enclosing all `points`
    pub fn from_points(points: &[GeoPoint]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(FitError::EmptyMarkerSet)?;

        let mut south = first.lat();
        let mut north = first.lat();
        for point in rest {
            south = south.min(point.lat());
            north = north.max(point.lat());
        }

        let (west, east) = minimal_lng_arc(points);

        Ok(Self {
            south,
            north,
            west,
            east,
        })
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    /// Whether the longitude arc crosses ±180°
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Checks if the region contains a point
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let lat_ok = point.lat() >= self.south && point.lat() <= self.north;
        let lng = point.lng();
        let lng_ok = if self.crosses_antimeridian() {
            lng >= self.west || lng <= self.east
        } else {
            lng >= self.west && lng <= self.east
        };
        lat_ok && lng_ok
    }

    /// Latitude span in degrees
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees, measured along the covered arc
    pub fn lng_span(&self) -> f64 {
        if self.crosses_antimeridian() {
            360.0 - (self.west - self.east)
        } else {
            self.east - self.west
        }
    }

    /// Gets the center point of the region
    pub fn center(&self) -> GeoPoint {
        let lat = (self.south + self.north) / 2.0;
        let mut lng = self.west + self.lng_span() / 2.0;
        if lng > 180.0 {
            lng -= 360.0;
        }
        // Derived from validated points, so both components stay in range.
        GeoPoint { lat, lng }
    }
}

/// Smallest arc covering every longitude in `points`: sort the longitudes,
/// find the largest circular gap between neighbours, and cover everything
/// outside that gap. Naive min/max would mis-fit sets straddling ±180°.
fn minimal_lng_arc(points: &[GeoPoint]) -> (f64, f64) {
    let mut lngs: Vec<f64> = points.iter().map(|p| p.lng()).collect();
    lngs.sort_by(f64::total_cmp);

    let last = lngs.len() - 1;
    // Start with the wrap gap between the easternmost and westernmost value.
    let mut largest_gap = lngs[0] + 360.0 - lngs[last];
    let mut arc = (lngs[0], lngs[last]);

    for i in 0..last {
        let gap = lngs[i + 1] - lngs[i];
        if gap > largest_gap {
            largest_gap = gap;
            // The arc wraps: from the value east of the gap, through ±180°,
            // back to the value west of it.
            arc = (lngs[i + 1], lngs[i]);
        }
    }

    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn test_geo_point_creation() {
        let coord = point(37.7749, -122.4194);
        assert_eq!(coord.lat(), 37.7749);
        assert_eq!(coord.lng(), -122.4194);
    }

    #[test]
    fn test_geo_point_rejects_out_of_range() {
        assert_eq!(
            GeoPoint::new(91.0, 0.0),
            Err(FitError::InvalidCoordinate { lat: 91.0, lng: 0.0 })
        );
        assert_eq!(
            GeoPoint::new(0.0, -180.5),
            Err(FitError::InvalidCoordinate {
                lat: 0.0,
                lng: -180.5
            })
        );
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_region_from_two_points() {
        let region = Region::from_points(&[point(37.5, -122.4), point(37.8, -121.9)]).unwrap();
        assert_eq!(region.south(), 37.5);
        assert_eq!(region.north(), 37.8);
        assert_eq!(region.west(), -122.4);
        assert_eq!(region.east(), -121.9);
        assert!(!region.crosses_antimeridian());
    }

    #[test]
    fn test_region_from_empty_set() {
        assert_eq!(Region::from_points(&[]), Err(FitError::EmptyMarkerSet));
    }

    #[test]
    fn test_region_single_point() {
        let region = Region::from_points(&[point(10.0, 20.0)]).unwrap();
        assert_eq!(region.lat_span(), 0.0);
        assert_eq!(region.lng_span(), 0.0);
        assert!(region.contains(&point(10.0, 20.0)));
    }

    #[test]
    fn test_region_wraps_antimeridian() {
        let region = Region::from_points(&[point(0.0, 170.0), point(5.0, -170.0)]).unwrap();
        assert!(region.crosses_antimeridian());
        assert_eq!(region.west(), 170.0);
        assert_eq!(region.east(), -170.0);
        // The short 20° arc across ±180°, not the naive 340° span.
        assert!((region.lng_span() - 20.0).abs() < 1e-9);
        assert!(region.contains(&point(2.0, 180.0)));
        assert!(region.contains(&point(2.0, -175.0)));
        assert!(!region.contains(&point(2.0, 0.0)));
    }

    #[test]
    fn test_region_contains_all_inputs() {
        let points = [
            point(37.33, -122.51),
            point(37.79, -121.86),
            point(37.50, -122.10),
            point(37.61, -122.40),
        ];
        let region = Region::from_points(&points).unwrap();
        for p in &points {
            assert!(region.contains(p), "region should contain {p:?}");
        }
    }

    #[test]
    fn test_region_center_across_wrap() {
        let region = Region::from_points(&[point(0.0, 175.0), point(10.0, -175.0)]).unwrap();
        let center = region.center();
        assert_eq!(center.lat(), 5.0);
        assert!((center.lng().abs() - 180.0).abs() < 1e-9);
    }
}
