//! Great-circle distance on a spherical Earth.

/// Mean Earth radius used for all distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance between two coordinates in decimal degrees, in miles.
///
/// Symmetric, zero for identical inputs, and non-negative. Inputs must be
/// finite and in range; anything else yields an unspecified value.
///
/// # Examples
///
/// ```
/// use dayroute::distance::haversine_miles;
///
/// let d = haversine_miles(34.0585, -118.4440, 34.0179, -118.4105);
/// assert!((d - 3.398).abs() < 1e-3);
/// assert_eq!(haversine_miles(34.0, -118.0, 34.0, -118.0), 0.0);
/// ```
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let sin_lat = (d_lat / 2.0).sin();
    let sin_lng = (d_lng / 2.0).sin();
    let h = sin_lat * sin_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * sin_lng * sin_lng;
    // Rounding can push h a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}
