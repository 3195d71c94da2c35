use crate::markers::Marker;
use crate::surface::DisplaySurface;

/// Owns the active marker sequence and mediates attach/detach against the
/// display surface.
///
/// The store is the single source of truth for which markers currently
/// exist; the surface only mirrors it. Both mutations run inside a single
/// `&mut self` call, so in a threaded embedding one caller-side lock is
/// enough to make the detach-then-attach update atomic.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Replaces the whole active set: detaches every current marker,
    /// attaches every marker in `new_markers`, then swaps the sequence in.
    pub fn replace<S>(&mut self, surface: &mut S, new_markers: Vec<Marker>)
    where
        S: DisplaySurface + ?Sized,
    {
        for marker in &self.markers {
            surface.detach(marker.id());
        }
        for marker in &new_markers {
            surface.attach(marker);
        }
        log::debug!(
            "replaced {} markers with {}",
            self.markers.len(),
            new_markers.len()
        );
        self.markers = new_markers;
    }

    /// Attaches one marker and appends it to the end of the sequence.
    /// Existing markers are untouched.
    pub fn append<S>(&mut self, surface: &mut S, marker: Marker)
    where
        S: DisplaySurface + ?Sized,
    {
        surface.attach(&marker);
        log::debug!("appended marker {}", marker.id());
        self.markers.push(marker);
    }

    /// Read-only view of the active set
    pub fn current(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::GeoPoint;
    use crate::surface::{RecordingSurface, SurfaceCall};

    fn marker(id: &str, lat: f64, lng: f64) -> Marker {
        Marker::new(id.to_string(), GeoPoint::new(lat, lng).unwrap())
    }

    #[test]
    fn test_replace_detaches_old_then_attaches_new() {
        let mut surface = RecordingSurface::new();
        let mut store = MarkerStore::new();

        store.replace(&mut surface, vec![marker("a", 37.5, -122.4)]);
        store.replace(
            &mut surface,
            vec![marker("b", 37.6, -122.3), marker("c", 37.7, -122.2)],
        );

        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::Attach {
                    marker_id: "a".to_string()
                },
                SurfaceCall::Detach {
                    marker_id: "a".to_string()
                },
                SurfaceCall::Attach {
                    marker_id: "b".to_string()
                },
                SurfaceCall::Attach {
                    marker_id: "c".to_string()
                },
            ]
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_with_empty_detaches_everything_once() {
        let mut surface = RecordingSurface::new();
        let mut store = MarkerStore::new();

        store.replace(
            &mut surface,
            vec![marker("a", 37.5, -122.4), marker("b", 37.6, -122.3)],
        );
        store.replace(&mut surface, Vec::new());

        assert!(store.current().is_empty());
        assert_eq!(surface.detach_count("a"), 1);
        assert_eq!(surface.detach_count("b"), 1);
    }

    #[test]
    fn test_append_leaves_existing_markers_alone() {
        let mut surface = RecordingSurface::new();
        let mut store = MarkerStore::new();

        store.replace(
            &mut surface,
            vec![marker("a", 37.5, -122.4), marker("b", 37.6, -122.3)],
        );
        store.append(&mut surface, marker("m", 37.7, -122.2));

        let ids: Vec<&str> = store.current().iter().map(|m| m.id()).collect();
        assert_eq!(ids, ["a", "b", "m"]);
        assert_eq!(surface.attach_count("m"), 1);
        assert_eq!(surface.attach_count("a"), 1);
        assert_eq!(surface.detach_count("a"), 0);
        assert_eq!(surface.detach_count("b"), 0);
    }
}
