//! Errors raised before any geometry is computed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Quadrant or ring count outside its supported range.
    #[error("invalid {field} count {value}: expected between {min} and {max}")]
    ConfigShape {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// An entry refers to a quadrant or ring that does not exist.
    #[error("entry '{label}' has {field} {value}: expected between 0 and {max}")]
    EntryBounds {
        label: String,
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("invalid option {name}: {value}")]
    InvalidOption { name: &'static str, value: f64 },

    #[error("could not parse radar config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LayoutError {
    /// Short machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutError::ConfigShape { .. } => "config_shape",
            LayoutError::EntryBounds { .. } => "entry_bounds",
            LayoutError::InvalidOption { .. } => "invalid_option",
            LayoutError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_field_and_range() {
        let e = LayoutError::ConfigShape { field: "quadrant", value: 1, min: 2, max: 8 };
        assert_eq!(e.to_string(), "invalid quadrant count 1: expected between 2 and 8");

        let e = LayoutError::EntryBounds { label: "Rust".to_string(), field: "ring", value: 9, max: 3 };
        assert_eq!(e.to_string(), "entry 'Rust' has ring 9: expected between 0 and 3");
        assert_eq!(e.kind(), "entry_bounds");
    }
}
