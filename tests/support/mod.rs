#![allow(dead_code)]

use radar_core::{EntryInput, LayoutOptions, QuadrantDef, RadarConfig, RingDef};

pub const RING_COLORS: [&str; 8] = [
    "#5ba300", "#009eb0", "#c7ba00", "#e09b96", "#8e44ad", "#2c3e50", "#d35400", "#16a085",
];

pub fn radar(quadrants: usize, rings: usize) -> RadarConfig {
    RadarConfig {
        quadrants: (0..quadrants).map(|i| QuadrantDef { name: format!("Quadrant {}", i) }).collect(),
        rings: (0..rings)
            .map(|i| RingDef { name: format!("Ring {}", i), color: RING_COLORS[i % RING_COLORS.len()].to_string() })
            .collect(),
        entries: Vec::new(),
        options: LayoutOptions::default(),
    }
}

pub fn with_entries(mut config: RadarConfig, entries: Vec<EntryInput>) -> RadarConfig {
    config.entries = entries;
    config
}

/// `count` entries in a single (quadrant, ring) group.
pub fn crowd(quadrant: usize, ring: usize, count: usize) -> Vec<EntryInput> {
    (0..count).map(|i| EntryInput::new(format!("entry-{:02}", i), quadrant, ring)).collect()
}

/// A few entries in every segment of the chart, group sizes cycling through 1..=4.
pub fn scatter(quadrants: usize, rings: usize) -> Vec<EntryInput> {
    let mut entries = Vec::new();
    for q in 0..quadrants {
        for r in 0..rings {
            let n = 1 + (q * rings + r) % 4;
            for i in 0..n {
                entries.push(EntryInput::new(format!("q{}r{}-{}", q, r, i), q, r));
            }
        }
    }
    entries
}
