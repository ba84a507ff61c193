// Segment calculator.
//
// A segment is the padded wedge where one (quadrant, ring) group lives. It is built once
// per group and then shared read-only by every entry of the group, both for the initial
// placement and for re-clamping after every physics step.
//
// Guard rails (never errors):
// - a radial band that inverts after padding collapses to a 2-unit band at its midpoint
// - angular padding is capped below half the window width, and dropped entirely if the
//   window would still invert

use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

use super::{unwrap_angle, Point, Polar, Quadrant, RectF};
use crate::rng::UniformSampler;

/// Inner radius of the innermost ring, so ring 0 never degenerates into a disc.
const INNERMOST_RADIUS: f64 = 30.0;
/// Margin around the outer-arc bounding rectangle.
const BOUNDS_MARGIN: f64 = 20.0;
/// Angular padding never eats the whole window.
const ANGLE_EPSILON: f64 = 0.01;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Padding {
    pub radial: f64,
    /// Pixels along the arc at the segment's mid radius.
    pub angular: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub quadrant: usize,
    pub ring: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Radians, `angle_min < angle_max`.
    pub angle_min: f64,
    pub angle_max: f64,
    pub bounds: RectF,
}

impl Segment {
    pub fn new(
        quadrant: usize,
        ring: usize,
        quadrants: &[Quadrant],
        ring_radii: &[i32],
        padding: Padding,
    ) -> Segment {
        let q = &quadrants[quadrant];

        let base_inner = if ring == 0 { INNERMOST_RADIUS } else { ring_radii[ring - 1] as f64 };
        let base_outer = ring_radii[ring] as f64;

        let mut inner = base_inner + padding.radial;
        let mut outer = base_outer - padding.radial;
        if outer <= inner {
            let mid = (base_inner + base_outer) / 2.0;
            log::warn!(
                "Segment::new(): band of quadrant {} ring {} inverted by padding, collapsing around {:.1}",
                quadrant, ring, mid
            );
            inner = mid - 1.0;
            outer = mid + 1.0;
        }

        let window_min = q.angle_min();
        let window_max = q.angle_max();
        let mid_radius = (inner + outer) / 2.0;
        let max_pad = (window_max - window_min) / 2.0 - ANGLE_EPSILON;
        let pad = (padding.angular / mid_radius).min(max_pad).max(0.0);

        let (mut angle_min, mut angle_max) = (window_min + pad, window_max - pad);
        if angle_max <= angle_min {
            log::warn!(
                "Segment::new(): window of quadrant {} ring {} inverted by padding, dropping it",
                quadrant, ring
            );
            angle_min = window_min;
            angle_max = window_max;
        }

        let bounds = wedge_bounds(inner, outer, angle_min, angle_max);

        Segment { quadrant, ring, inner_radius: inner, outer_radius: outer, angle_min, angle_max, bounds }
    }

    pub fn angle_range(&self) -> f64 {
        self.angle_max - self.angle_min
    }

    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    pub fn radial_depth(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    fn mid_angle(&self) -> f64 {
        (self.angle_min + self.angle_max) / 2.0
    }

    /// Pull a point back into the wedge.
    ///
    /// The rectangle pass runs first: clamping in polar space alone can leave points in
    /// the corners the wedge does not cover.
    pub fn clamp(&self, p: Point) -> Point {
        let boxed = self.bounds.clamp(p);
        let polar = boxed.to_polar();
        let t = unwrap_angle(polar.t, self.mid_angle());
        Polar {
            t: t.clamp(self.angle_min, self.angle_max),
            r: polar.r.clamp(self.inner_radius, self.outer_radius),
        }
        .to_point()
    }

    pub fn random_point(&self, sampler: &mut impl UniformSampler) -> Point {
        let t = sampler.between(self.angle_min, self.angle_max);
        let r = sampler.between(self.inner_radius, self.outer_radius);
        Polar { t, r }.to_point()
    }

    /// Whether `p` lies inside the wedge, allowing `tolerance` in both radius and angle.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        let polar = p.to_polar();
        let t = unwrap_angle(polar.t, self.mid_angle());
        polar.r >= self.inner_radius - tolerance
            && polar.r <= self.outer_radius + tolerance
            && t >= self.angle_min - tolerance
            && t <= self.angle_max + tolerance
    }
}

/// Bounding rectangle of the wedge: the four corners plus every cardinal direction the
/// window spans, taken on the outer arc, widened by a fixed margin.
fn wedge_bounds(inner: f64, outer: f64, angle_min: f64, angle_max: f64) -> RectF {
    let mut samples = vec![
        Polar { t: angle_min, r: outer },
        Polar { t: angle_max, r: outer },
        Polar { t: angle_min, r: inner },
        Polar { t: angle_max, r: inner },
    ];
    for k in -4..=4 {
        let t = k as f64 * FRAC_PI_2;
        if t > angle_min && t < angle_max {
            samples.push(Polar { t, r: outer });
        }
    }

    RectF::enclosing(samples.into_iter().map(Polar::to_point))
        .map(|r| r.expand(BOUNDS_MARGIN))
        .unwrap_or(RectF { min_x: -outer, min_y: -outer, max_x: outer, max_y: outer })
}
