//! Humidex, Beaufort scale and sea-level pressure

/// Humidex index for a temperature in °C and relative humidity in %
///
/// <http://en.wikipedia.org/wiki/Humidex>
#[must_use]
pub fn humidex(temperature: f64, humidity_pct: f64) -> f64 {
    let vapour_pressure =
        6.112 * 10f64.powf(7.5 * temperature / (237.7 + temperature)) * humidity_pct / 100.0;
    temperature + 0.555555556 * (vapour_pressure - 10.0)
}

/// Beaufort force (0-12) for a wind speed in m/s
///
/// <http://en.wikipedia.org/wiki/Beaufort_scale>
#[must_use]
pub fn beaufort_index(speed_ms: f64) -> u8 {
    match speed_ms {
        s if s < 0.3 => 0,
        s if s < 1.6 => 1,
        s if s < 3.4 => 2,
        s if s < 5.5 => 3,
        s if s < 8.0 => 4,
        s if s < 10.8 => 5,
        s if s < 13.9 => 6,
        s if s < 17.2 => 7,
        s if s < 20.8 => 8,
        s if s < 24.5 => 9,
        s if s < 28.5 => 10,
        s if s < 32.7 => 11,
        _ => 12,
    }
}

/// Equivalent sea-level pressure in hPa
///
/// `pressure` is the absolute pressure in hPa measured at `altitude_m` metres
/// with an air temperature of `temperature` °C.
#[must_use]
pub fn sea_level_pressure(pressure: f64, temperature: f64, altitude_m: f64) -> f64 {
    let lapse = 0.0065 * altitude_m;
    let base = 1.0 - lapse / (temperature + lapse + 273.15);
    pressure * base.powf(-5.257)
}
