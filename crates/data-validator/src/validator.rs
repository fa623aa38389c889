//! Validator for Address Payloads

use crate::error::ValidationError;
use geodesy::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Label length bounds in characters (inclusive)
    pub label_length: (usize, usize),
    /// Latitude bounds in degrees (exclusive)
    pub latitude_range: (f64, f64),
    /// Longitude bounds in degrees (exclusive)
    pub longitude_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            label_length: (1, 100),
            latitude_range: (-90.0, 90.0),
            longitude_range: (-180.0, 180.0),
        }
    }
}

/// Validator for address create/replace payloads and proximity radii
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a value against an open interval.
    ///
    /// NaN fails every comparison and is therefore rejected.
    pub fn validate_open_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if range.0 < value && value < range.1 {
            Ok(())
        } else {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        }
    }

    /// Validate label length (counted in characters, not bytes)
    pub fn validate_label(&self, label: &str) -> Result<(), ValidationError> {
        let (min, max) = self.config.label_length;
        let length = label.chars().count();
        if length < min || length > max {
            return Err(ValidationError::InvalidLength {
                field: "label",
                length,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Validate latitude
    pub fn validate_latitude(&self, latitude: f64) -> Result<(), ValidationError> {
        self.validate_open_range("latitude", latitude, self.config.latitude_range)
    }

    /// Validate longitude
    pub fn validate_longitude(&self, longitude: f64) -> Result<(), ValidationError> {
        self.validate_open_range("longitude", longitude, self.config.longitude_range)
    }

    /// Validate a latitude/longitude pair
    pub fn validate_coordinate(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Coordinate, ValidationError> {
        self.validate_latitude(latitude)?;
        self.validate_longitude(longitude)?;
        Ok(Coordinate::new(latitude, longitude))
    }

    /// Validate a full address payload. Fields are checked label first, then
    /// latitude, then longitude; the first failure is returned.
    pub fn validate_address(
        &self,
        label: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Coordinate, ValidationError> {
        let result = self
            .validate_label(label)
            .and_then(|_| self.validate_coordinate(latitude, longitude));
        if let Err(e) = &result {
            debug!(field = e.field(), "Rejected address payload: {}", e);
        }
        result
    }

    /// Validate a proximity search radius in kilometres
    pub fn validate_radius(&self, radius_km: f64) -> Result<(), ValidationError> {
        if radius_km.is_finite() && radius_km >= 0.0 {
            Ok(())
        } else {
            Err(ValidationError::NegativeRadius(radius_km))
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
