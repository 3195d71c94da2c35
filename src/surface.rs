//! The injected display-surface capability.
//!
//! The core never talks to a real rendering surface. Everything it needs
//! from one sits behind [`DisplaySurface`], so the whole crate can be
//! exercised with the [`RecordingSurface`] fake.

use crate::core::geo::{GeoPoint, Region};
use crate::markers::Marker;

/// Attach/detach/viewpoint operations a map display exposes
pub trait DisplaySurface {
    /// Attaches one marker to the display
    fn attach(&mut self, marker: &Marker);

    /// Detaches the marker with the given id from the display
    fn detach(&mut self, marker_id: &str);

    /// Requests the camera frame `region` with `padding` display units of
    /// margin on all sides. Fire-and-forget: the caller does not await
    /// rendering completion.
    fn set_viewpoint(&mut self, region: &Region, padding: f64);
}

/// Discrete user actions delivered by the display surface
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Long-press gesture at a geographic position
    LongPress { point: GeoPoint },
    /// The fit-bounds button was pressed
    FitRequested,
    /// Explicit request to regenerate the marker set
    RefreshRequested,
}

/// One recorded surface call, in order of arrival
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Attach { marker_id: String },
    Detach { marker_id: String },
    SetViewpoint { region: Region, padding: f64 },
}

/// Test double recording every surface call in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// How many times the given marker was attached
    pub fn attach_count(&self, marker_id: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Attach { marker_id: id } if id == marker_id))
            .count()
    }

    /// How many times the given marker was detached
    pub fn detach_count(&self, marker_id: &str) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Detach { marker_id: id } if id == marker_id))
            .count()
    }

    /// Every viewpoint request issued so far
    pub fn viewpoints(&self) -> Vec<(&Region, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::SetViewpoint { region, padding } => Some((region, *padding)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn attach(&mut self, marker: &Marker) {
        self.calls.push(SurfaceCall::Attach {
            marker_id: marker.id().to_string(),
        });
    }

    fn detach(&mut self, marker_id: &str) {
        self.calls.push(SurfaceCall::Detach {
            marker_id: marker_id.to_string(),
        });
    }

    fn set_viewpoint(&mut self, region: &Region, padding: f64) {
        self.calls.push(SurfaceCall::SetViewpoint {
            region: region.clone(),
            padding,
        });
    }
}
