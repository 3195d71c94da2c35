use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

/// How a marker is drawn: a static icon asset or a cycling frame list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MarkerIcon {
    Static {
        asset: String,
    },
    Animated {
        frames: Vec<String>,
        frame_interval_ms: u64,
    },
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self::Static {
            asset: "marker-default".to_string(),
        }
    }
}

/// A labeled point of interest rendered on a map
///
/// Owned exclusively by the [`MarkerStore`](crate::markers::MarkerStore)
/// while active; the display surface only borrows it for attach. Invalid
/// coordinates are impossible here because construction goes through
/// [`GeoPoint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: String,
    position: GeoPoint,
    label: Option<String>,
    icon: MarkerIcon,
}

impl Marker {
    pub fn new(id: String, position: GeoPoint) -> Self {
        Self {
            id,
            position,
            label: None,
            icon: MarkerIcon::default(),
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn icon(&self) -> &MarkerIcon {
        &self.icon
    }

    /// Display attributes as an untyped blob, for surfaces that take
    /// JSON options
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat(),
                "lng": self.position.lng()
            },
            "label": self.label,
            "icon": self.icon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).unwrap()
    }

    #[test]
    fn test_marker_builder() {
        let marker = Marker::new("m1".to_string(), point(37.5, -122.4))
            .with_label("Pier 39".to_string())
            .with_icon(MarkerIcon::Animated {
                frames: vec!["pulse-0".to_string(), "pulse-1".to_string()],
                frame_interval_ms: 120,
            });

        assert_eq!(marker.id(), "m1");
        assert_eq!(marker.label(), Some("Pier 39"));
        assert_eq!(marker.position().lat(), 37.5);
        assert!(matches!(marker.icon(), MarkerIcon::Animated { frames, .. } if frames.len() == 2));
    }

    #[test]
    fn test_marker_options_blob() {
        let marker = Marker::new("m2".to_string(), point(37.8, -121.9));
        let options = marker.options();
        assert_eq!(options["position"]["lat"], 37.8);
        assert_eq!(options["position"]["lng"], -121.9);
        assert!(options["label"].is_null());
    }
}
