//! Great-circle distance and bearing arithmetic

/// Distance in metres between two points given in decimal degrees
///
/// Haversine formula. `earth_diameter_m` is usually
/// [`ToolboxVariant::earth_diameter_m`](super::ToolboxVariant::earth_diameter_m).
#[must_use]
pub fn great_circle_distance(
    lat_a: f64,
    lng_a: f64,
    lat_b: f64,
    lng_b: f64,
    earth_diameter_m: f64,
) -> f64 {
    let d_lat = ((lat_b - lat_a).to_radians() / 2.0).sin().powi(2);
    let d_lng = ((lng_b - lng_a).to_radians() / 2.0).sin().powi(2);

    let a = d_lat + lat_a.to_radians().cos() * lat_b.to_radians().cos() * d_lng;

    earth_diameter_m * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Difference between two bearings in degrees
///
/// Stays within [0, 180] for bearings in [0, 360]; larger inputs are not wrapped.
#[must_use]
pub fn angle_difference(bearing_1: f64, bearing_2: f64) -> f64 {
    180.0 - ((bearing_2 - bearing_1).abs() - 180.0).abs()
}
