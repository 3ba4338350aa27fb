/// Mean Earth radius used for reported distances.
pub const DISTANCE_EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius used to turn a search radius in km into radians for the spherical cap.
/// Differs from `DISTANCE_EARTH_RADIUS_KM` (equatorial vs mean); both are kept as-is.
pub const NEARBY_EARTH_RADIUS_KM: f64 = 6378.1;

/// Central angle in radians between two lat/lon pairs given in degrees.
pub fn central_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1) * std::f64::consts::PI / 180.0;
    let d_lon = (lon2 - lon1) * std::f64::consts::PI / 180.0;

    let a = (d_lat / 2.0).sin().powi(2)
        + (lat1 * std::f64::consts::PI / 180.0).cos()
            * (lat2 * std::f64::consts::PI / 180.0).cos()
            * (d_lon / 2.0).sin().powi(2);
    // rounding near antipodes can push `a` past 1
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance in km using the haversine formula.
///
/// Inputs are not range checked; out-of-range angles give a mathematically
/// defined but geographically meaningless result.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    DISTANCE_EARTH_RADIUS_KM * central_angle(lat1, lon1, lat2, lon2)
}
