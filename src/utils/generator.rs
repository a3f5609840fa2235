//! Generates random locations for tests.

use rand::Rng;

use crate::types::location::Location;
use crate::utils::haversine::EARTH_RADIUS_METERS;

/// Generates `capacity` random locations within roughly `radius_meters`
/// of `location`, at elevations between 0 and 100 metres.
///
/// Uses a flat-earth offset, which is close enough for radii of a few
/// tens of kilometres away from the poles.
pub fn generate_locations_near(
    location: &Location,
    radius_meters: f64,
    capacity: usize,
    rng: &mut impl Rng,
) -> Vec<Location> {
    (0..capacity)
        .map(|_| {
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance = rng.gen_range(0.0..radius_meters);
            let d_lat = (distance * bearing.cos() / EARTH_RADIUS_METERS).to_degrees();
            let d_lon = (distance * bearing.sin()
                / (EARTH_RADIUS_METERS * location.latitude.to_radians().cos()))
            .to_degrees();
            Location::new(
                location.latitude + d_lat,
                location.longitude + d_lon,
                rng.gen_range(0.0..100.0),
            )
        })
        .collect()
}
