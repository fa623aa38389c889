//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value outside the open interval (min, max)
    #[error("{field} value {value} is out of range ({min}, {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Text length outside [min, max] characters
    #[error("{field} length {length} must be between {min} and {max} characters")]
    InvalidLength {
        field: &'static str,
        length: usize,
        min: usize,
        max: usize,
    },

    /// Search radius negative or not a finite number
    #[error("radius_km must be a finite, non-negative number, got {0}")]
    NegativeRadius(f64),
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } | Self::InvalidLength { field, .. } => field,
            Self::NegativeRadius(_) => "radius_km",
        }
    }
}
