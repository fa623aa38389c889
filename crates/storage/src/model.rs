//! Address Records

use geodesy::Coordinate;
use serde::{Deserialize, Serialize};

/// A persisted, labelled geographic point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Address {
    /// Assigned by storage on create, immutable afterwards
    pub id: i64,
    #[sqlx(rename = "address")]
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Address {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Field values for a create or full replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewAddress {
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    pub(crate) fn into_address(self, id: i64) -> Address {
        Address {
            id,
            label: self.label,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
