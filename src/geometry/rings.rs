//! Ring radii.
//!
//! Every ring count is derived from the same four-ring reference pattern, so charts with
//! more rings keep the proportions of the classic layout.

/// Reference radii of a four-ring chart with an outer radius of 400.
pub const REFERENCE_RADII: [f64; 4] = [130.0, 220.0, 310.0, 400.0];

const REFERENCE_OUTER: f64 = 400.0;
const MIN_RADIUS: i32 = 10;

/// Radii for `count` rings scaled to an outer radius of `radius`.
pub fn generate_ring_radii(count: usize, radius: f64) -> Vec<i32> {
    let scale = radius / REFERENCE_OUTER;
    let last = (REFERENCE_RADII.len() - 1) as f64;

    let mut radii: Vec<i32> = (0..count)
        .map(|i| {
            let base = if count == REFERENCE_RADII.len() {
                REFERENCE_RADII[i]
            } else {
                interpolate(i as f64 / (count - 1) as f64 * last)
            };
            ((base * scale).round() as i32).max(MIN_RADIUS)
        })
        .collect();

    // The floor can flatten the innermost rings of a tiny chart.
    for i in 1..radii.len() {
        if radii[i] <= radii[i - 1] {
            radii[i] = radii[i - 1].saturating_add(1);
        }
    }

    radii
}

/// Linear interpolation in the reference pattern's index space.
fn interpolate(p: f64) -> f64 {
    let last = REFERENCE_RADII.len() - 1;
    if p >= last as f64 {
        return REFERENCE_RADII[last];
    }
    let lo = p.floor() as usize;
    let t = p - lo as f64;
    REFERENCE_RADII[lo] + t * (REFERENCE_RADII[lo + 1] - REFERENCE_RADII[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_rings_use_reference() {
        assert_eq!(generate_ring_radii(4, 400.0), vec![130, 220, 310, 400]);
        assert_eq!(generate_ring_radii(4, 200.0), vec![65, 110, 155, 200]);
    }

    #[test]
    fn test_interpolated_counts() {
        // p = 0, 0.75, 1.5, 2.25, 3
        assert_eq!(generate_ring_radii(5, 400.0), vec![130, 198, 265, 333, 400]);
        // p = 0, 1, 2, 3 spread over 7 rings: every half step
        assert_eq!(generate_ring_radii(7, 400.0), vec![130, 175, 220, 265, 310, 355, 400]);
    }

    #[test]
    fn test_strictly_increasing_and_floored() {
        for n in 4..=8 {
            for radius in [20.0, 50.0, 400.0, 1000.0] {
                let radii = generate_ring_radii(n, radius);
                assert_eq!(radii.len(), n);
                assert!(radii.iter().all(|&r| r >= 10));
                for pair in radii.windows(2) {
                    assert!(pair[0] < pair[1], "n={} radius={} radii={:?}", n, radius, radii);
                }
            }
        }
    }

    #[test]
    fn test_scales_linearly() {
        for n in 4..=8 {
            let base = generate_ring_radii(n, 400.0);
            let doubled = generate_ring_radii(n, 800.0);
            for (a, b) in base.iter().zip(&doubled) {
                assert!((b - 2 * a).abs() <= 1, "{} vs {}", a, b);
            }
            assert_eq!(*doubled.last().unwrap(), 800);
        }
    }

    #[test]
    fn test_huge_radius_saturates() {
        let radii = generate_ring_radii(4, 1e10);
        assert_eq!(radii.len(), 4);
        assert!(radii.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*radii.last().unwrap(), i32::MAX);
    }
}
