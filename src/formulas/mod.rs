//! Formula library
//!
//! Stateless closed-form formulas made available to scripts and rules:
//! - Geography: great-circle distance and bearing difference
//! - Compass: bearing to 16- or 8-point compass labels
//! - Weather: humidex, Beaufort scale and sea-level pressure correction
//! - Sager: pressure trend, pressure level and cloud level for the Sager forecaster
//!
//! None of these functions validate their input. Out-of-range values produce
//! a compass sentinel or whatever number the arithmetic yields.

pub mod compass;
pub mod geo;
pub mod sager;
pub mod weather;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use compass::{CompassRose, bearing_to_compass};
pub use geo::{angle_difference, great_circle_distance};
pub use sager::{
    CloudLevel, PressureTrend, sager_cloud_level, sager_pressure_level, sager_pressure_trend,
};
pub use weather::{beaufort_index, humidex, sea_level_pressure};

/// Earth diameter in metres: 3958.75 miles * 2 * 1609 m/mile
pub const EARTH_DIAMETER_M: f64 = 3958.75 * 2.0 * 1609.0;

/// Earth "diameter" of the legacy formula set, off by a factor of ten
pub const LEGACY_EARTH_DIAMETER_M: f64 = 3958.75 * 2.0 * 16090.0;

/// Which of the two historical formula sets to use
///
/// Both sets share every formula; they only differ in the Earth constant used
/// for distances and in the label returned for out-of-range bearings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolboxVariant {
    #[default]
    Standard,
    Legacy,
}

impl ToolboxVariant {
    /// Earth diameter constant fed to the haversine formula
    #[must_use]
    pub fn earth_diameter_m(self) -> f64 {
        match self {
            ToolboxVariant::Standard => EARTH_DIAMETER_M,
            ToolboxVariant::Legacy => LEGACY_EARTH_DIAMETER_M,
        }
    }

    /// Label returned for bearings outside [-180, 360]
    #[must_use]
    pub fn compass_sentinel(self) -> &'static str {
        match self {
            ToolboxVariant::Standard => "-",
            ToolboxVariant::Legacy => "Unknown",
        }
    }
}

impl fmt::Display for ToolboxVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolboxVariant::Standard => write!(f, "standard"),
            ToolboxVariant::Legacy => write!(f, "legacy"),
        }
    }
}
