//! Quadrant generation: N equal angular windows covering the full turn.

use serde::Serialize;
use std::f64::consts::PI;

/// One angular sector. Bounds are in half-turn units.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Quadrant {
    pub radial_min: f64,
    pub radial_max: f64,
    /// Unit direction vector at the window's angular midpoint.
    pub factor_x: f64,
    pub factor_y: f64,
}

impl Quadrant {
    pub fn angle_min(&self) -> f64 {
        self.radial_min * PI
    }

    pub fn angle_max(&self) -> f64 {
        self.radial_max * PI
    }
}

/// Split the full turn into `count` windows of `2 / count` half-turns each.
///
/// A two-quadrant chart is rotated by a quarter turn so it splits left/right instead of
/// top/bottom.
pub fn generate_quadrants(count: usize) -> Vec<Quadrant> {
    let width = 2.0 / count as f64;
    let offset = if count == 2 { -0.5 } else { 0.0 };

    (0..count)
        .map(|i| {
            let radial_min = offset + i as f64 * width;
            let radial_max = offset + (i + 1) as f64 * width;
            let mid = (radial_min + radial_max) / 2.0 * PI;
            Quadrant {
                radial_min,
                radial_max,
                factor_x: mid.cos(),
                factor_y: mid.sin(),
            }
        })
        .collect()
}

/// Order in which quadrants are walked for legends and id assignment.
pub fn quadrant_order(count: usize) -> Vec<usize> {
    if count == 4 {
        // Fixed order of the classic four-quadrant radar.
        return vec![2, 3, 1, 0];
    }
    let start = count / 2;
    (0..count).map(|k| (start + k) % count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_partition_full_turn() {
        for n in 2..=8 {
            let qs = generate_quadrants(n);
            assert_eq!(qs.len(), n);
            for pair in qs.windows(2) {
                assert!((pair[0].radial_max - pair[1].radial_min).abs() < 1e-12);
            }
            let span = qs[n - 1].radial_max - qs[0].radial_min;
            assert!((span - 2.0).abs() < 1e-12, "n={} span={}", n, span);
        }
    }

    #[test]
    fn test_direction_vectors_are_unit() {
        for n in 2..=8 {
            for q in generate_quadrants(n) {
                let len = (q.factor_x * q.factor_x + q.factor_y * q.factor_y).sqrt();
                assert!((len - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_two_quadrants_split_vertically() {
        let qs = generate_quadrants(2);
        assert_eq!(qs[0].radial_min, -0.5);
        assert_eq!(qs[0].radial_max, 0.5);
        // First half faces right, second faces left.
        assert!((qs[0].factor_x - 1.0).abs() < 1e-12);
        assert!((qs[1].factor_x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_four_quadrants_midpoints() {
        let qs = generate_quadrants(4);
        assert_eq!(qs[0].radial_min, 0.0);
        assert_eq!(qs[0].radial_max, 0.5);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!((qs[0].factor_x - h).abs() < 1e-12 && (qs[0].factor_y - h).abs() < 1e-12);
        assert!((qs[2].factor_x + h).abs() < 1e-12 && (qs[2].factor_y + h).abs() < 1e-12);
    }

    #[test]
    fn test_order_for_four_is_fixed() {
        assert_eq!(quadrant_order(4), vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_order_is_permutation() {
        for n in 2..=8 {
            let mut order = quadrant_order(n);
            if n != 4 {
                assert_eq!(order[0], n / 2);
            }
            order.sort_unstable();
            assert_eq!(order, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_order_wraps() {
        assert_eq!(quadrant_order(5), vec![2, 3, 4, 0, 1]);
        assert_eq!(quadrant_order(2), vec![1, 0]);
    }
}
