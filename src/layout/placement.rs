// Initial grid placement.
//
// Before the collision pass runs, every group is spread over a grid of cells laid out in
// wedge-local polar space (angular columns x radial rows). Each entry lands somewhere in
// the middle 70% of its cell, which keeps neighbours apart while avoiding a visibly
// regular pattern.
//
// Properties:
// - Deterministic for a given sampler state
// - Every placed point lies inside the segment
// - Groups larger than the grid wrap around instead of being truncated

use crate::geometry::{Point, Polar, Segment};
use crate::rng::UniformSampler;

/// Fraction of the item size one grid cell must offer along each axis.
const CAPACITY_DIVISOR: f64 = 0.7;
/// Entries stay within this fraction range of their cell.
const JITTER_MIN: f64 = 0.15;
const JITTER_MAX: f64 = 0.85;

/// How a group is divided into cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridShape {
    pub angular: usize,
    pub radial: usize,
}

impl GridShape {
    /// Column and row of the `index`-th entry.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        let mut col = index % self.angular;
        let mut row = index / self.angular;
        if row >= self.radial {
            let wrapped = index % (self.angular * self.radial);
            col = wrapped % self.angular;
            row = wrapped / self.angular;
        }
        (col, row)
    }
}

/// Pick the grid for `count` entries in `segment`.
pub fn grid_shape(segment: &Segment, count: usize, item_size: f64) -> GridShape {
    // Ring 0's arc is the narrowest: measure it at the inner edge rather than the middle.
    let effective_radius = if segment.ring == 0 { segment.inner_radius } else { segment.mid_radius() };
    let arc_length = segment.angle_range() * effective_radius;
    let radial_depth = segment.radial_depth();

    let cell = item_size * CAPACITY_DIVISOR;
    let angular_capacity = ((arc_length / cell).floor() as usize).max(1);
    let radial_capacity = ((radial_depth / cell).floor() as usize).max(1);

    let shape = match count {
        0 | 1 => GridShape { angular: 1, radial: 1 },
        // Small groups stay on one arc; past capacity they wrap onto shared columns.
        2..=4 => GridShape { angular: count.min(angular_capacity), radial: 1 },
        _ => {
            let base = (count as f64).sqrt().ceil();
            let aspect = arc_length / radial_depth;
            let factor = if aspect > 2.0 {
                1.5
            } else if aspect > 1.0 {
                1.2
            } else if aspect < 0.5 {
                if segment.ring == 0 { 0.85 } else { 0.7 }
            } else {
                1.0
            };
            let angular = ((base * factor).ceil() as usize).max(1);
            let radial = count.div_ceil(angular);
            GridShape {
                angular: angular.min(angular_capacity).max(2),
                radial: radial.min(radial_capacity).max(2),
            }
        }
    };

    log::trace!(
        "grid_shape(): quadrant {} ring {} count {} arc {:.1} depth {:.1} -> {}x{}",
        segment.quadrant,
        segment.ring,
        count,
        arc_length,
        radial_depth,
        shape.angular,
        shape.radial
    );

    shape
}

/// Positions for `count` entries of one group, in group order.
pub fn place_group(
    segment: &Segment,
    count: usize,
    item_size: f64,
    sampler: &mut impl UniformSampler,
) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let shape = grid_shape(segment, count, item_size);
    let cell_angle = segment.angle_range() / shape.angular as f64;
    let cell_depth = segment.radial_depth() / shape.radial as f64;

    (0..count)
        .map(|i| {
            let (col, row) = shape.cell(i);
            let fa = sampler.between(JITTER_MIN, JITTER_MAX);
            let fr = sampler.between(JITTER_MIN, JITTER_MAX);
            Polar {
                t: segment.angle_min + (col as f64 + fa) * cell_angle,
                r: segment.inner_radius + (row as f64 + fr) * cell_depth,
            }
            .to_point()
        })
        .collect()
}
