//! Struct definitions and implementations for [`Location`].

use serde::{Deserialize, Serialize};

use crate::utils::haversine;

/// A [`Location`] is a value type that represents the geographic
/// position of an entity. Entities rarely store one directly; a
/// [`LocationProvider`](`super::provider::LocationProvider`) reads the
/// three components out of whatever shape the entity has.
///
/// Elevation matters because two points of interest at the same
/// latitude and longitude can still be far apart vertically, e.g. a
/// sensor on a mast and one at ground level.
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// The latitude of the location in degrees.
    pub latitude: f64,

    /// The longitude of the location in degrees.
    pub longitude: f64,

    /// The elevation of the location in metres.
    pub elevation: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Returns true if every component lies within its physical range.
    ///
    /// See [`haversine::is_valid_location`].
    pub fn is_valid(&self) -> bool {
        haversine::is_valid_location(self.latitude, self.longitude, self.elevation)
    }

    /// Squared elevation-adjusted distance to `other` in square metres.
    pub fn squared_distance_to(&self, other: &Location) -> f64 {
        haversine::squared_distance(
            self.latitude,
            self.longitude,
            self.elevation,
            other.latitude,
            other.longitude,
            other.elevation,
        )
    }

    /// Elevation-adjusted distance to `other` in metres.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.squared_distance_to(other).sqrt()
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}
