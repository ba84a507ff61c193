// Structural precondition checks.
//
// Everything downstream assumes a config that passed `validate`: counts in range, every
// entry index inside its table, numeric options usable. The first violation wins and
// nothing is mutated either way.

use super::{LayoutOptions, RadarConfig};
use crate::error::LayoutError;

pub const MIN_QUADRANTS: usize = 2;
pub const MAX_QUADRANTS: usize = 8;
pub const MIN_RINGS: usize = 4;
pub const MAX_RINGS: usize = 8;
/// Ring radii are whole pixels stored as `i32`; anything larger is not a chart.
pub const MAX_RADIUS: f64 = 1.0e6;

pub fn validate(config: &RadarConfig) -> Result<(), LayoutError> {
    check_count("quadrant", config.quadrants.len(), MIN_QUADRANTS, MAX_QUADRANTS)?;
    check_count("ring", config.rings.len(), MIN_RINGS, MAX_RINGS)?;
    check_options(&config.options)?;

    for entry in &config.entries {
        if entry.quadrant >= config.quadrants.len() {
            return Err(LayoutError::EntryBounds {
                label: entry.label.clone(),
                field: "quadrant",
                value: entry.quadrant,
                max: config.quadrants.len() - 1,
            });
        }
        if entry.ring >= config.rings.len() {
            return Err(LayoutError::EntryBounds {
                label: entry.label.clone(),
                field: "ring",
                value: entry.ring,
                max: config.rings.len() - 1,
            });
        }
    }

    Ok(())
}

fn check_count(field: &'static str, value: usize, min: usize, max: usize) -> Result<(), LayoutError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(LayoutError::ConfigShape { field, value, min, max })
    }
}

fn check_options(options: &LayoutOptions) -> Result<(), LayoutError> {
    let positive = [
        ("radius", options.radius),
        ("collision_radius", options.collision_radius),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(LayoutError::InvalidOption { name, value });
        }
    }
    if options.radius > MAX_RADIUS {
        return Err(LayoutError::InvalidOption { name: "radius", value: options.radius });
    }

    let non_negative = [
        ("radial_padding", options.radial_padding),
        ("angular_padding", options.angular_padding),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(LayoutError::InvalidOption { name, value });
        }
    }

    Ok(())
}
