//! Elevation-adjusted haversine distance and location validation.
//!
//! The distance between two locations is the great-circle distance of
//! their latitude/longitude pairs combined with the elevation difference
//! as the two legs of a right triangle. Comparisons should use
//! [`squared_distance`], which skips the final square root.
//!
//! See <http://www.movable-type.co.uk/scripts/latlong.html>.

/// Mean radius of the Earth in metres.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.0;

/// Calculates the squared distance between two locations in square
/// metres, considering the elevation difference between them.
///
/// # Arguments
/// * `lat1`, `lon1` - Latitude and longitude of location 1 in degrees.
/// * `ele1` - Elevation of location 1 in metres.
/// * `lat2`, `lon2` - Latitude and longitude of location 2 in degrees.
/// * `ele2` - Elevation of location 2 in metres.
pub fn squared_distance(lat1: f64, lon1: f64, ele1: f64, lat2: f64, lon2: f64, ele2: f64) -> f64 {
    let lat_distance = (lat2 - lat1).to_radians();
    let lon_distance = (lon2 - lon1).to_radians();
    let sin_lat_distance = (lat_distance / 2.0).sin();
    let sin_lon_distance = (lon_distance / 2.0).sin();
    let a = (sin_lat_distance * sin_lat_distance)
        + (lat1.to_radians().cos()
            * lat2.to_radians().cos()
            * (sin_lon_distance * sin_lon_distance));
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    let distance = EARTH_RADIUS_METERS * c;
    let height = ele1 - ele2;

    (distance * distance) + (height * height)
}

/// Calculates the distance between two locations in metres,
/// considering the elevation difference between them.
///
/// See [`squared_distance`] for the arguments.
pub fn distance(lat1: f64, lon1: f64, ele1: f64, lat2: f64, lon2: f64, ele2: f64) -> f64 {
    squared_distance(lat1, lon1, ele1, lat2, lon2, ele2).sqrt()
}

/// Checks that latitude, longitude and elevation fall within their
/// acceptable ranges. Bounds are inclusive; NaN is never valid.
pub fn is_valid_location(lat: f64, lon: f64, ele: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) && ele >= 0.0
}
