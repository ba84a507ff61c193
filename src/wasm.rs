//! WASM bindings for the radar-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here. Failures are
//! reported through `log`; in the browser `init_logging` routes them to the console.

use wasm_bindgen::prelude::*;
use serde_json::to_string;

use crate::config::RadarConfig;
use crate::error::LayoutError;
use crate::geometry::Point;
use crate::layout::{layout_radar, RadarLayout, SegmentId};
use crate::output::{ErrorInfo, RadarOutput};

fn parse_and_layout(input: &str) -> Result<RadarLayout, LayoutError> {
    let config = RadarConfig::from_json(input)?;
    layout_radar(&config)
}

fn serialize(output: &RadarOutput) -> String {
    to_string(output).unwrap_or_else(|e| {
        log::error!("Error serializing layout: {}", e);
        "{\"error\": {\"kind\": \"serialize\", \"message\": \"Serialization error\"}}".to_string()
    })
}

/// Route `log` records to the browser console at the given level ("error" .. "trace").
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    crate::logging::init(crate::logging::parse_level(level))
}

/// Lay out a radar described by a JSON config and return the JSON layout.
/// Errors are reported in the `error` field instead of throwing.
#[wasm_bindgen]
pub fn layout_radar_json(input: &str) -> String {
    match parse_and_layout(input) {
        Ok(layout) => serialize(&RadarOutput::from(&layout)),
        Err(e) => {
            log::error!("Error laying out radar: {}", e);
            serialize(&RadarOutput::from_error(&e))
        }
    }
}

/// A laid-out radar kept alive on the Rust side, so a renderer can keep stepping the
/// simulation and clamp or sample segments every frame.
#[wasm_bindgen]
pub struct RadarSession {
    layout: RadarLayout,
}

impl RadarSession {
    pub fn from_json(input: &str) -> Result<RadarSession, LayoutError> {
        let layout = parse_and_layout(input)?;
        Ok(RadarSession { layout })
    }

    pub fn layout(&self) -> &RadarLayout {
        &self.layout
    }

    fn has_segment(&self, segment: usize) -> bool {
        segment < self.layout.segments().len()
    }
}

#[wasm_bindgen]
impl RadarSession {
    #[wasm_bindgen(constructor)]
    pub fn new(input: &str) -> Result<RadarSession, JsValue> {
        RadarSession::from_json(input).map_err(|e| {
            log::error!("Error laying out radar: {}", e);
            let info = to_string(&ErrorInfo::from(&e)).unwrap_or_else(|_| e.to_string());
            JsValue::from_str(&info)
        })
    }

    pub fn tick(&mut self) {
        self.layout.tick();
    }

    pub fn is_settled(&self) -> bool {
        self.layout.simulation().is_settled()
    }

    /// Clamp `(x, y)` into a segment. Returns `[x, y]`; unknown segments leave the point as is.
    pub fn clamp(&self, segment: usize, x: f64, y: f64) -> Vec<f64> {
        if !self.has_segment(segment) {
            return vec![x, y];
        }
        let p = self.layout.clamp(SegmentId(segment), Point::new(x, y));
        vec![p.x, p.y]
    }

    /// Random point inside a segment as `[x, y]`; empty for unknown segments.
    pub fn random_point(&mut self, segment: usize) -> Vec<f64> {
        if !self.has_segment(segment) {
            return Vec::new();
        }
        let p = self.layout.random_point(SegmentId(segment));
        vec![p.x, p.y]
    }

    pub fn output_json(&self) -> String {
        serialize(&RadarOutput::from(&self.layout))
    }
}
