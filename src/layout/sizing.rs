//! Adaptive collision radius.
//!
//! Crowded segments get smaller markers so the whole group still fits; a floor keeps
//! markers readable.

use crate::geometry::Segment;

const SAFETY_FACTOR: f64 = 0.55;
const MIN_RADIUS: f64 = 12.0;
const MIN_RADIUS_CROWDED: f64 = 13.0;
const MIN_RADIUS_PACKED: f64 = 14.0;
const INNER_RING_SHRINK: f64 = 0.9;
const INNER_RING_MIN: f64 = 10.0;

/// Collision radius shared by the `count` entries of a group.
pub fn collision_radius(segment: &Segment, count: usize, quadrant_count: usize) -> f64 {
    let area = segment.angle_range() * segment.mid_radius() * segment.radial_depth();
    let per_entry = area / count.max(1) as f64;
    let mut radius = (per_entry / std::f64::consts::PI).sqrt() * SAFETY_FACTOR;

    let floor = if count > 15 {
        MIN_RADIUS_PACKED
    } else if count > 10 {
        MIN_RADIUS_CROWDED
    } else {
        MIN_RADIUS
    };
    radius = radius.max(floor);

    // Innermost wedges shrink fastest as the turn is cut into more quadrants.
    if segment.ring == 0 && quadrant_count >= 6 {
        radius = (radius * INNER_RING_SHRINK).max(INNER_RING_MIN);
    }

    radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{generate_quadrants, generate_ring_radii, Padding};

    fn segment(q: usize, r: usize, nq: usize) -> Segment {
        Segment::new(
            q,
            r,
            &generate_quadrants(nq),
            &generate_ring_radii(4, 400.0),
            Padding { radial: 15.0, angular: 10.0 },
        )
    }

    #[test]
    fn test_sparse_group_uses_area() {
        let s = segment(0, 3, 4);
        let expected = (s.angle_range() * s.mid_radius() * s.radial_depth() / std::f64::consts::PI).sqrt() * 0.55;
        assert!((collision_radius(&s, 1, 4) - expected).abs() < 1e-9);
        assert!(expected > 12.0);
    }

    #[test]
    fn test_floors_by_group_size() {
        // Ring 0 is small enough that every floor kicks in.
        let s = segment(0, 0, 4);
        assert_eq!(collision_radius(&s, 10, 4), 12.0);
        assert_eq!(collision_radius(&s, 11, 4), 13.0);
        assert_eq!(collision_radius(&s, 16, 4), 14.0);
    }

    #[test]
    fn test_inner_ring_shrinks_with_many_quadrants() {
        let s = segment(0, 0, 6);
        let r = collision_radius(&s, 20, 6);
        assert!((r - 14.0 * 0.9).abs() < 1e-9);

        let s = segment(0, 0, 8);
        assert!(collision_radius(&s, 3, 8) >= 10.0);

        // Outer rings keep their floor.
        let s = segment(0, 1, 8);
        assert!(collision_radius(&s, 20, 8) >= 14.0);
    }
}
