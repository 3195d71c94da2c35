use rand::Rng;

use crate::core::constants::{DEFAULT_MARKER_COUNT, SF_BAY_RANGE};
use crate::core::generator::{random_points, LatLngRange};
use crate::core::geo::GeoPoint;
use crate::fit::BoundsFitter;
use crate::markers::{Marker, MarkerStore};
use crate::surface::{DisplaySurface, SurfaceEvent};
use crate::{FitError, Result};

/// Glue between the marker store, the bounds fitter and one display
/// surface.
///
/// Every entry point is a discrete, non-overlapping operation; the
/// coordinator itself holds no locks. Embeddings that drive it from more
/// than one thread wrap it in their own mutex, as
/// [`RefreshHandle`](crate::refresh::RefreshHandle) does.
pub struct MapCoordinator<S: DisplaySurface> {
    surface: S,
    store: MarkerStore,
    fitter: BoundsFitter,
    range: LatLngRange,
    marker_count: usize,
    batch_seq: u64,
    user_marker_seq: u64,
}

impl<S: DisplaySurface> MapCoordinator<S> {
    /// Creates a coordinator with the default fitter, range and batch size
    pub fn new(surface: S) -> Self {
        Self::with_settings(surface, BoundsFitter::new(), SF_BAY_RANGE, DEFAULT_MARKER_COUNT)
    }

    pub fn with_settings(
        surface: S,
        fitter: BoundsFitter,
        range: LatLngRange,
        marker_count: usize,
    ) -> Self {
        Self {
            surface,
            store: MarkerStore::new(),
            fitter,
            range,
            marker_count,
            batch_seq: 0,
            user_marker_seq: 0,
        }
    }

    /// Regenerates the whole marker set from random points
    pub fn regenerate(&mut self) -> Result<()> {
        self.regenerate_with(&mut rand::thread_rng())
    }

    /// Same as [`regenerate`](Self::regenerate), with a caller-supplied rng
    pub fn regenerate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let points = random_points(self.marker_count, &self.range, rng)?;
        self.batch_seq += 1;
        let batch = self.batch_seq;
        let markers: Vec<Marker> = points
            .into_iter()
            .enumerate()
            .map(|(i, point)| {
                Marker::new(format!("batch{batch}-{i}"), point)
                    .with_label(format!("Marker {i}"))
            })
            .collect();
        self.store.replace(&mut self.surface, markers);
        Ok(())
    }

    /// Fits the camera to whatever markers are currently present.
    ///
    /// Fitting uses the current state, not a snapshot tied to generation.
    /// An empty marker set is recovered locally: the viewpoint update is
    /// skipped and no error escapes.
    pub fn fit_bounds(&mut self) {
        match self.fitter.compute_region(self.store.current()) {
            Ok(region) => self.fitter.fit(&mut self.surface, &region),
            Err(FitError::EmptyMarkerSet) => {
                log::debug!("fit requested with no markers present, skipping viewpoint update");
            }
            Err(err) => log::warn!("fit failed: {err}"),
        }
    }

    /// Appends a single user-placed marker at `point`
    pub fn place_marker(&mut self, point: GeoPoint) {
        self.user_marker_seq += 1;
        let marker = Marker::new(format!("user-{}", self.user_marker_seq), point)
            .with_label("Dropped pin".to_string());
        self.store.append(&mut self.surface, marker);
    }

    /// Dispatches one discrete surface event
    pub fn handle_event(&mut self, event: SurfaceEvent) -> Result<()> {
        match event {
            SurfaceEvent::LongPress { point } => {
                self.place_marker(point);
                Ok(())
            }
            SurfaceEvent::FitRequested => {
                self.fit_bounds();
                Ok(())
            }
            SurfaceEvent::RefreshRequested => self.regenerate(),
        }
    }

    /// Read-only view of the active marker set
    pub fn markers(&self) -> &[Marker] {
        self.store.current()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
