//! Bearing to compass label conversion

use serde::{Deserialize, Serialize};
use std::fmt;

const SIXTEEN_POINTS: [&str; 17] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW", "N",
];

const EIGHT_POINTS: [&str; 9] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW", "N"];

/// Compass resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassRose {
    /// 16 labels, 22.5° apart
    Sixteen,
    /// 8 labels, 45° apart
    Eight,
}

impl CompassRose {
    /// Width of one sector in degrees
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            CompassRose::Sixteen => 22.5,
            CompassRose::Eight => 45.0,
        }
    }

    /// Labels starting at north, clockwise, with north repeated at the end
    #[must_use]
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            CompassRose::Sixteen => &SIXTEEN_POINTS,
            CompassRose::Eight => &EIGHT_POINTS,
        }
    }
}

impl fmt::Display for CompassRose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompassRose::Sixteen => write!(f, "16-point"),
            CompassRose::Eight => write!(f, "8-point"),
        }
    }
}

/// Convert a bearing in degrees to its compass label
///
/// Bearings in (-180, 0) are shifted by +360. Anything above 360 or below -180
/// returns `sentinel`. Exactly 360 is accepted and maps to north.
#[must_use]
pub fn bearing_to_compass(bearing: f64, rose: CompassRose, sentinel: &'static str) -> &'static str {
    let bearing = if bearing < 0.0 && bearing > -180.0 {
        bearing + 360.0
    } else {
        bearing
    };

    if bearing > 360.0 || bearing < -180.0 {
        return sentinel;
    }

    let step = rose.step();
    // rem_euclid keeps -180 itself on the south sector instead of a negative index
    let sector = ((bearing + step / 2.0).rem_euclid(360.0) / step).floor();

    // NaN casts to 0 and lands on north
    rose.labels()
        .get(sector as usize)
        .copied()
        .unwrap_or(sentinel)
}
