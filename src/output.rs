//! Output types for the rendering layer.
//!
//! These structs are serialized to JSON and handed to whatever draws the chart.

use serde::Serialize;

use crate::error::LayoutError;
use crate::geometry::{RectF, Segment};
use crate::layout::{LegendSection, RadarLayout};

/// A quadrant with its name and window
#[derive(Debug, Clone, Serialize)]
pub struct QuadrantOutput {
    pub name: String,
    pub radial_min: f64,
    pub radial_max: f64,
    pub factor_x: f64,
    pub factor_y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RingOutput {
    pub name: String,
    pub color: String,
    pub radius: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentOutput {
    pub quadrant: usize,
    pub ring: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub angle_min: f64,
    pub angle_max: f64,
    pub bounds: RectF,
}

/// A placed entry ready to draw
#[derive(Debug, Clone, Serialize)]
pub struct EntryOutput {
    pub id: String,
    pub label: String,
    pub quadrant: usize,
    pub ring: usize,
    pub active: bool,
    /// Movement indicator: 0 none, 1 in, -1 out, 2 new
    pub moved: i8,
    pub x: f64,
    pub y: f64,
    pub stable_x: f64,
    pub stable_y: f64,
    pub color: String,
    pub collision_radius: f64,
    /// Index into `segments`
    pub segment: usize,
}

/// Error information for the caller's error display
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Label of the offending entry, for entry errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl From<&LayoutError> for ErrorInfo {
    fn from(e: &LayoutError) -> Self {
        let (field, value, entry) = match e {
            LayoutError::ConfigShape { field, value, .. } => {
                (Some(format!("{}s", field)), Some(value.to_string()), None)
            }
            LayoutError::EntryBounds { label, field, value, .. } => {
                (Some(field.to_string()), Some(value.to_string()), Some(label.clone()))
            }
            LayoutError::InvalidOption { name, value } => (Some(name.to_string()), Some(value.to_string()), None),
            LayoutError::Parse(_) => (None, None, None),
        };
        ErrorInfo {
            kind: e.kind().to_string(),
            message: e.to_string(),
            field,
            value,
            entry,
        }
    }
}

/// The combined output sent to the renderer
#[derive(Debug, Clone, Default, Serialize)]
pub struct RadarOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub quadrants: Vec<QuadrantOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rings: Vec<RingOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<EntryOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legend: Vec<LegendSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl RadarOutput {
    pub fn from_error(e: &LayoutError) -> Self {
        RadarOutput { error: Some(ErrorInfo::from(e)), ..RadarOutput::default() }
    }
}

impl From<&Segment> for SegmentOutput {
    fn from(s: &Segment) -> Self {
        SegmentOutput {
            quadrant: s.quadrant,
            ring: s.ring,
            inner_radius: s.inner_radius,
            outer_radius: s.outer_radius,
            angle_min: s.angle_min,
            angle_max: s.angle_max,
            bounds: s.bounds,
        }
    }
}

impl From<&RadarLayout> for RadarOutput {
    fn from(layout: &RadarLayout) -> Self {
        let quadrants = layout
            .quadrants
            .iter()
            .zip(&layout.quadrant_names)
            .map(|(q, name)| QuadrantOutput {
                name: name.clone(),
                radial_min: q.radial_min,
                radial_max: q.radial_max,
                factor_x: q.factor_x,
                factor_y: q.factor_y,
            })
            .collect();

        let rings = layout
            .rings
            .iter()
            .map(|r| RingOutput { name: r.name.clone(), color: r.color.clone(), radius: r.radius })
            .collect();

        let entries = layout
            .entries
            .iter()
            .map(|e| EntryOutput {
                id: e.id.clone(),
                label: e.label.clone(),
                quadrant: e.quadrant,
                ring: e.ring,
                active: e.active,
                moved: e.moved.into(),
                x: e.x,
                y: e.y,
                stable_x: e.stable_x,
                stable_y: e.stable_y,
                color: e.color.clone(),
                collision_radius: e.collision_radius,
                segment: e.segment.0,
            })
            .collect();

        RadarOutput {
            quadrants,
            rings,
            segments: layout.segments().iter().map(SegmentOutput::from).collect(),
            entries,
            legend: layout.legend.clone(),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RadarConfig;
    use crate::layout::layout_radar;

    const CONFIG: &str = r##"{
        "quadrants": [{"name": "Languages"}, {"name": "Infrastructure"}, {"name": "Datastores"}, {"name": "Frameworks"}],
        "rings": [
            {"name": "ADOPT", "color": "#5ba300"},
            {"name": "TRIAL", "color": "#009eb0"},
            {"name": "ASSESS", "color": "#c7ba00"},
            {"name": "HOLD", "color": "#e09b96"}
        ],
        "entries": [
            {"label": "Rust", "quadrant": 0, "ring": 0, "moved": 2},
            {"label": "Kafka", "quadrant": 2, "ring": 1}
        ]
    }"##;

    #[test]
    fn test_layout_serializes() {
        let cfg = RadarConfig::from_json(CONFIG).unwrap();
        let layout = layout_radar(&cfg).unwrap();
        let out = RadarOutput::from(&layout);
        assert_eq!(out.quadrants.len(), 4);
        assert_eq!(out.segments.len(), 2);
        assert_eq!(out.entries[0].moved, 2);
        // Quadrant 2 comes first in the legend.
        assert_eq!(out.entries[1].id, "1");

        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["rings"][3]["radius"], 400);
        assert_eq!(json["entries"][0]["label"], "Rust");
    }

    #[test]
    fn test_error_info() {
        let mut cfg = RadarConfig::from_json(CONFIG).unwrap();
        cfg.entries[1].quadrant = 4;
        let err = layout_radar(&cfg).unwrap_err();
        let out = RadarOutput::from_error(&err);
        let info = out.error.as_ref().unwrap();
        assert_eq!(info.kind, "entry_bounds");
        assert_eq!(info.entry.as_deref(), Some("Kafka"));
        assert_eq!(info.value.as_deref(), Some("4"));

        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("entries").is_none());
        assert_eq!(json["error"]["field"], "quadrant");
    }
}
