//! Coordinates model for geographic points

use serde::{Deserialize, Serialize};

use crate::formulas::{ToolboxVariant, great_circle_distance};

/// Point on the Earth's surface
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new point
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format point as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Great-circle distance in metres to `other`
    #[must_use]
    pub fn distance_to(&self, other: &Coordinates, variant: ToolboxVariant) -> f64 {
        great_circle_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
            variant.earth_diameter_m(),
        )
    }
}
