//! Geometry and collision-resolution engine for radial "technology radar" charts.
//!
//! Entries are assigned to a wedge formed by one of 2-8 quadrants and one of 4-8 rings,
//! placed on a jittered grid inside it, then pushed apart by a small collision simulation
//! that re-clamps every entry into its wedge after each step.
//!
//! ```
//! use radar_core::{layout_radar, RadarConfig};
//!
//! let config = RadarConfig::from_json(r##"{
//!     "quadrants": [{"name": "Languages"}, {"name": "Tools"}, {"name": "Platforms"}, {"name": "Techniques"}],
//!     "rings": [
//!         {"name": "ADOPT", "color": "#5ba300"},
//!         {"name": "TRIAL", "color": "#009eb0"},
//!         {"name": "ASSESS", "color": "#c7ba00"},
//!         {"name": "HOLD", "color": "#e09b96"}
//!     ],
//!     "entries": [{"label": "Rust", "quadrant": 0, "ring": 0}]
//! }"##).unwrap();
//!
//! let layout = layout_radar(&config).unwrap();
//! assert_eq!(layout.entries[0].id, "1");
//! ```

pub mod config;
mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod output;
pub mod rng;
mod wasm;

pub use config::{EntryInput, LayoutOptions, Moved, QuadrantDef, RadarConfig, RingDef};
pub use error::LayoutError;
pub use geometry::{Point, Segment};
pub use layout::{layout_radar, Entry, RadarLayout, SegmentId};
pub use output::RadarOutput;
pub use rng::{SeededRng, UniformSampler};
pub use wasm::{layout_radar_json, RadarSession};
#[cfg(target_arch = "wasm32")]
pub use wasm::init_logging;
