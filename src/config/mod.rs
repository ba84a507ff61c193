//! Radar configuration as handed over by the config-loading collaborator.
//!
//! Everything here is plain serializable data. Numeric options fall back to
//! [`LayoutOptions::default`] when missing from the input.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

mod validate;

pub use validate::{validate, MAX_QUADRANTS, MAX_RADIUS, MAX_RINGS, MIN_QUADRANTS, MIN_RINGS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarConfig {
    pub quadrants: Vec<QuadrantDef>,
    /// Ordered inner to outer.
    pub rings: Vec<RingDef>,
    #[serde(default)]
    pub entries: Vec<EntryInput>,
    #[serde(default)]
    pub options: LayoutOptions,
}

impl RadarConfig {
    pub fn from_json(input: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadrantDef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingDef {
    pub name: String,
    pub color: String,
}

/// An entry as created by the caller, before the engine has placed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryInput {
    pub label: String,
    pub quadrant: usize,
    pub ring: usize,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub moved: Moved,
}

fn default_active() -> bool {
    true
}

impl EntryInput {
    pub fn new(label: impl Into<String>, quadrant: usize, ring: usize) -> Self {
        Self {
            label: label.into(),
            quadrant,
            ring,
            active: true,
            moved: Moved::None,
        }
    }
}

/// Movement since the previous edition of the radar.
///
/// Serialized as the integers used by radar data files: `0` unchanged, `1` moved in,
/// `-1` moved out, `2` new.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Moved {
    #[default]
    None,
    In,
    Out,
    New,
}

impl TryFrom<i8> for Moved {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Moved::None),
            1 => Ok(Moved::In),
            -1 => Ok(Moved::Out),
            2 => Ok(Moved::New),
            other => Err(format!("unknown moved indicator {}", other)),
        }
    }
}

impl From<Moved> for i8 {
    fn from(moved: Moved) -> i8 {
        match moved {
            Moved::None => 0,
            Moved::In => 1,
            Moved::Out => -1,
            Moved::New => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Target outer radius of the chart; ring radii scale linearly with it.
    pub radius: f64,
    /// Inset applied to both radial edges of every segment.
    pub radial_padding: f64,
    /// Inset applied to both angular edges, in pixels measured at the segment's mid radius.
    pub angular_padding: f64,
    /// Item size used for grid capacity, and the baseline collision radius.
    pub collision_radius: f64,
    pub seed: i64,
    /// Print layout colors every entry with its ring color, active or not.
    pub print_layout: bool,
    pub inactive_color: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            radius: 400.0,
            radial_padding: 15.0,
            angular_padding: 10.0,
            collision_radius: 12.0,
            seed: 42,
            print_layout: false,
            inactive_color: "#DDDDDE".to_string(),
        }
    }
}
