//! # Markerfit
//!
//! A small coordinator for map-marker lifecycles and camera bounds fitting.
//!
//! The crate owns the mutable marker collection, derives a minimal
//! wraparound-aware bounding region from it, and issues camera-fit requests
//! against an injected display surface. Rendering itself is out of scope:
//! the surface is an opaque collaborator behind the
//! [`DisplaySurface`] trait, which keeps the whole core testable with a
//! recording fake.

pub mod coordinator;
pub mod core;
pub mod fit;
pub mod markers;
pub mod refresh;
pub mod surface;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    generator::{random_points, LatLngRange},
    geo::{GeoPoint, Region},
};

pub use crate::coordinator::MapCoordinator;
pub use crate::fit::BoundsFitter;
pub use crate::markers::{Marker, MarkerIcon, MarkerStore};
pub use crate::refresh::RefreshHandle;
pub use crate::surface::{DisplaySurface, RecordingSurface, SurfaceCall, SurfaceEvent};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, FitError>;

/// Common error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("invalid coordinates: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("cannot compute a region from an empty marker set")]
    EmptyMarkerSet,
}

/// Error type alias for convenience
pub type Error = FitError;
