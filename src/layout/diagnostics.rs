//! Post-layout checks: overlapping entries and entries outside their segment.

use serde::Serialize;

use super::spatial_grid::SpatialGrid;
use super::{Entry, RadarLayout};

/// Slack allowed when checking segment membership.
const CONTAINMENT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    /// Pairs of entry indices closer than their combined collision radii allow.
    pub overlapping_pairs: Vec<(usize, usize)>,
    /// Largest overlap found, as a fraction of the combined radii.
    pub worst_overlap: f64,
    /// Entries whose position lies outside their segment.
    pub outside_segment: Vec<usize>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.overlapping_pairs.is_empty() && self.outside_segment.is_empty()
    }
}

/// Check a layout. Two entries overlap when their distance is below
/// `(ri + rj) * (1 - tolerance)`.
pub fn diagnose(layout: &RadarLayout, tolerance: f64) -> Diagnostics {
    let mut diagnostics = Diagnostics {
        outside_segment: layout
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !layout.segment(e.segment).contains(e.position(), CONTAINMENT_TOLERANCE))
            .map(|(i, _)| i)
            .collect(),
        ..Diagnostics::default()
    };

    let (pairs, worst) = find_overlaps(&layout.entries, tolerance);
    diagnostics.overlapping_pairs = pairs;
    diagnostics.worst_overlap = worst;

    if !diagnostics.is_clean() {
        log::warn!(
            "diagnose(): {} overlapping pairs (worst {:.3}), {} entries outside their segment",
            diagnostics.overlapping_pairs.len(),
            diagnostics.worst_overlap,
            diagnostics.outside_segment.len()
        );
    }

    diagnostics
}

fn find_overlaps(entries: &[Entry], tolerance: f64) -> (Vec<(usize, usize)>, f64) {
    let max_radius = entries.iter().map(|e| e.collision_radius).fold(0.0, f64::max);
    let mut grid = SpatialGrid::new(2.0 * max_radius);
    for (i, e) in entries.iter().enumerate() {
        grid.insert(i, e.position());
    }

    let mut pairs = Vec::new();
    let mut worst = 0.0f64;
    for (i, e) in entries.iter().enumerate() {
        for j in grid.query(e.position()) {
            if j <= i {
                continue;
            }
            let other = &entries[j];
            let combined = e.collision_radius + other.collision_radius;
            let dist = e.position().distance(&other.position());
            if dist < combined * (1.0 - tolerance) {
                pairs.push((i, j));
            }
            if combined > 0.0 {
                worst = worst.max(1.0 - dist / combined);
            }
        }
    }
    (pairs, worst)
}
