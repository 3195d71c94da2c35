//! Crate-wide defaults. Keeping them in a single place makes it easier to
//! tweak the magic numbers.

use std::time::Duration;

use crate::core::generator::LatLngRange;

/// Visual margin, in display units, added on all sides of a fitted region.
pub const DEFAULT_FIT_PADDING: f64 = 50.0;

/// How often the periodic refresh regenerates the marker set.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Number of randomly generated markers per batch.
pub const DEFAULT_MARKER_COUNT: usize = 10;

/// Generation range covering the San Francisco Bay.
pub const SF_BAY_RANGE: LatLngRange = LatLngRange {
    south: 37.330584,
    north: 37.797048,
    west: -122.519890,
    east: -121.851070,
};
