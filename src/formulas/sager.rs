//! Sager weathercaster inputs
//!
//! The Sager forecaster combines a pressure trend, a pressure level and a
//! cloud/rain level into a forecast code. These helpers turn raw readings into
//! those three levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pressure evolution over the observation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureTrend {
    RisingRapidly = 1,
    RisingSlowly = 2,
    Normal = 3,
    DecreasingSlowly = 4,
    DecreasingRapidly = 5,
}

impl PressureTrend {
    /// Sager level, 1 to 5
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// Sky condition on the Sager cloud scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudLevel {
    Clear = 1,
    PartlyCloudy = 2,
    MostlyOvercast = 3,
    Overcast = 4,
    Raining = 5,
}

impl CloudLevel {
    /// Sager level, 1 to 5
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// Classify the change from `historic` to `current` pressure (hPa)
#[must_use]
pub fn sager_pressure_trend(current: f64, historic: f64) -> PressureTrend {
    match current - historic {
        d if d > 1.7 => PressureTrend::RisingRapidly,
        d if d > 0.68 => PressureTrend::RisingSlowly,
        d if d > -0.68 => PressureTrend::Normal,
        d if d > -1.7 => PressureTrend::DecreasingSlowly,
        _ => PressureTrend::DecreasingRapidly,
    }
}

/// Sager pressure level (1-8) for a pressure in hPa
///
/// Everything at or below 975.28 hPa, including readings under 948.19, is level 8.
#[must_use]
pub fn sager_pressure_level(current: f64) -> u8 {
    match current {
        p if p > 1029.46 => 1,
        p if p > 1019.3 => 2,
        p if p > 1012.53 => 3,
        p if p > 1005.76 => 4,
        p if p > 999.0 => 5,
        p if p > 988.8 => 6,
        p if p > 975.28 => 7,
        _ => 8,
    }
}

/// Sager cloud level from cloud coverage (%) and rain state
#[must_use]
pub fn sager_cloud_level(cloud_pct: i64, raining: bool) -> CloudLevel {
    if raining {
        return CloudLevel::Raining;
    }

    match cloud_pct {
        c if c > 80 => CloudLevel::Overcast,
        c if c > 50 => CloudLevel::MostlyOvercast,
        c if c > 20 => CloudLevel::PartlyCloudy,
        _ => CloudLevel::Clear,
    }
}

impl fmt::Display for PressureTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureTrend::RisingRapidly => write!(f, "Rising Rapidly"),
            PressureTrend::RisingSlowly => write!(f, "Rising Slowly"),
            PressureTrend::Normal => write!(f, "Normal"),
            PressureTrend::DecreasingSlowly => write!(f, "Decreasing Slowly"),
            PressureTrend::DecreasingRapidly => write!(f, "Decreasing Rapidly"),
        }
    }
}

impl fmt::Display for CloudLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudLevel::Clear => write!(f, "Clear"),
            CloudLevel::PartlyCloudy => write!(f, "Partly Cloudy"),
            CloudLevel::MostlyOvercast => write!(f, "Mostly Overcast"),
            CloudLevel::Overcast => write!(f, "Overcast"),
            CloudLevel::Raining => write!(f, "Raining"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1013.0, 1010.0, PressureTrend::RisingRapidly)]
    #[case(1013.0, 1012.0, PressureTrend::RisingSlowly)]
    #[case(1013.0, 1013.0, PressureTrend::Normal)]
    #[case(1013.0, 1013.5, PressureTrend::Normal)]
    #[case(1013.0, 1014.0, PressureTrend::DecreasingSlowly)]
    #[case(1013.0, 1016.0, PressureTrend::DecreasingRapidly)]
    fn test_pressure_trend(
        #[case] current: f64,
        #[case] historic: f64,
        #[case] expected: PressureTrend,
    ) {
        assert_eq!(sager_pressure_trend(current, historic), expected);
    }

    #[test]
    fn test_pressure_trend_levels() {
        assert_eq!(PressureTrend::RisingRapidly.level(), 1);
        assert_eq!(PressureTrend::Normal.level(), 3);
        assert_eq!(PressureTrend::DecreasingRapidly.level(), 5);
        assert_eq!(PressureTrend::DecreasingSlowly.to_string(), "Decreasing Slowly");
    }

    #[rstest]
    #[case(1030.0, 1)]
    #[case(1029.46, 2)]
    #[case(1020.0, 2)]
    #[case(1013.0, 3)]
    #[case(1006.0, 4)]
    #[case(1000.0, 5)]
    #[case(999.0, 6)]
    #[case(990.0, 6)]
    #[case(980.0, 7)]
    #[case(975.28, 8)]
    #[case(950.0, 8)]
    #[case(948.19, 8)]
    #[case(900.0, 8)]
    fn test_pressure_level(#[case] pressure: f64, #[case] expected: u8) {
        assert_eq!(sager_pressure_level(pressure), expected);
    }

    #[rstest]
    #[case(90, true, CloudLevel::Raining)]
    #[case(0, true, CloudLevel::Raining)]
    #[case(81, false, CloudLevel::Overcast)]
    #[case(80, false, CloudLevel::MostlyOvercast)]
    #[case(51, false, CloudLevel::MostlyOvercast)]
    #[case(50, false, CloudLevel::PartlyCloudy)]
    #[case(21, false, CloudLevel::PartlyCloudy)]
    #[case(20, false, CloudLevel::Clear)]
    #[case(10, false, CloudLevel::Clear)]
    #[case(-5, false, CloudLevel::Clear)]
    #[case(250, false, CloudLevel::Overcast)]
    fn test_cloud_level(#[case] cloud: i64, #[case] raining: bool, #[case] expected: CloudLevel) {
        assert_eq!(sager_cloud_level(cloud, raining), expected);
    }

    #[test]
    fn test_cloud_level_numbers() {
        assert_eq!(sager_cloud_level(90, true).level(), 5);
        assert_eq!(sager_cloud_level(10, false).level(), 1);
    }
}
