// Chart geometry: quadrant windows, ring radii and the padded wedges they form.
//
// Coordinates are chart-centered Cartesian (x right, y down as drawn by the renderer,
// which does not matter here) and polar (t in radians, r in pixels). Quadrant windows are
// expressed in half-turn units, so `radial_min = 0.5` means `0.5 * PI` radians.
//
// Submodules:
// - quadrants: angular windows + legend traversal order
// - rings: band radii derived from a fixed reference pattern
// - segment: padded wedge per (quadrant, ring), clamping and sampling

use serde::Serialize;
use std::f64::consts::PI;

pub mod quadrants;
pub mod rings;
pub mod segment;

pub use quadrants::{generate_quadrants, quadrant_order, Quadrant};
pub use rings::{generate_ring_radii, REFERENCE_RADII};
pub use segment::{Padding, Segment};

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_polar(self) -> Polar {
        Polar {
            t: self.y.atan2(self.x),
            r: (self.x * self.x + self.y * self.y).sqrt(),
        }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Polar {
    pub t: f64,
    pub r: f64,
}

impl Polar {
    pub fn to_point(self) -> Point {
        Point {
            x: self.r * self.t.cos(),
            y: self.r * self.t.sin(),
        }
    }
}

/// Axis-aligned rectangle in chart coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RectF {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl RectF {
    /// Smallest rectangle containing every point. `None` for an empty iterator.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<RectF> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut r = RectF { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        for p in iter {
            r.min_x = r.min_x.min(p.x);
            r.min_y = r.min_y.min(p.y);
            r.max_x = r.max_x.max(p.x);
            r.max_y = r.max_y.max(p.y);
        }
        Some(r)
    }

    pub fn expand(&self, margin: f64) -> RectF {
        RectF {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.clamp(self.min_x, self.max_x),
            y: p.y.clamp(self.min_y, self.max_y),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Shift `t` by whole turns into `[center - PI, center + PI)`.
///
/// `atan2` answers in `(-PI, PI]` while quadrant windows run anywhere in `[-PI/2, 2*PI]`.
pub fn unwrap_angle(t: f64, center: f64) -> f64 {
    let turn = 2.0 * PI;
    let mut t = t;
    while t < center - PI {
        t += turn;
    }
    while t >= center + PI {
        t -= turn;
    }
    t
}
