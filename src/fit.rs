use crate::core::constants::DEFAULT_FIT_PADDING;
use crate::core::geo::Region;
use crate::markers::Marker;
use crate::surface::DisplaySurface;
use crate::Result;

/// Computes minimal enclosing regions over marker sets and issues camera
/// fit requests against the display surface.
///
/// Stateless apart from the configured padding: both operations are pure
/// functions of their inputs plus the one side-effecting surface call.
#[derive(Debug, Clone)]
pub struct BoundsFitter {
    padding: f64,
}

impl BoundsFitter {
    /// Creates a fitter with the default 50-unit padding
    pub fn new() -> Self {
        Self {
            padding: DEFAULT_FIT_PADDING,
        }
    }

    pub fn with_padding(padding: f64) -> Self {
        Self { padding }
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Folds all marker positions into the minimal enclosing region.
    ///
    /// Fails with [`FitError::EmptyMarkerSet`](crate::FitError::EmptyMarkerSet)
    /// for zero markers; the result is never a degenerate region.
    pub fn compute_region(&self, markers: &[Marker]) -> Result<Region> {
        let points: Vec<_> = markers.iter().map(|m| m.position()).collect();
        Region::from_points(&points)
    }

    /// Requests that the surface frame `region` with the configured padding
    /// on all sides. Fire-and-forget: rendering completion is not awaited.
    pub fn fit<S>(&self, surface: &mut S, region: &Region)
    where
        S: DisplaySurface + ?Sized,
    {
        log::debug!(
            "fitting viewpoint to lat [{}, {}] lng [{}, {}] with padding {}",
            region.south(),
            region.north(),
            region.west(),
            region.east(),
            self.padding
        );
        surface.set_viewpoint(region, self.padding);
    }
}

impl Default for BoundsFitter {
    fn default() -> Self {
        Self::new()
    }
}
