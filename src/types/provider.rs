//! Location access for arbitrary entity types.
//!
//! Points of interest can be anything: a weather station, a transformer,
//! a vertiport. Rust has no inheritance, and forcing all of them into a
//! shared struct would be a hack, so a [`LocationProvider`] is written
//! once per entity type and reads the location out of it instead.
//!
//! Two ways to get one:
//! * implement the trait on a unit struct, or
//! * assemble a [`FnLocationProvider`] from closures with
//!   [`FnLocationProvider::builder`]. Latitude and longitude are
//!   mandatory, everything else falls back to a neutral default.

use std::fmt;
use std::sync::Arc;

use super::error::{Error, Result};
use super::location::Location;

/// Extracts location data from an entity of type `T`.
///
/// Every method must be a pure query. The coordinate accessors are only
/// meaningful when [`has_location`](`LocationProvider::has_location`)
/// returns true; callers should use
/// [`location`](`LocationProvider::location`), which checks first.
pub trait LocationProvider<T: ?Sized> {
    /// Returns the longitude of the entity in degrees.
    fn longitude(&self, entity: &T) -> f64;

    /// Returns the latitude of the entity in degrees.
    fn latitude(&self, entity: &T) -> f64;

    /// Returns the elevation of the entity in metres.
    fn elevation(&self, _entity: &T) -> f64 {
        0.0
    }

    /// Returns the id of the entity, used when reporting it.
    fn id(&self, _entity: &T) -> String {
        String::new()
    }

    /// Checks if the entity has location data.
    fn has_location(&self, _entity: &T) -> bool {
        true
    }

    /// Reads the full location of the entity, or [`None`] if it has
    /// none. The coordinate accessors are not called in that case.
    fn location(&self, entity: &T) -> Option<Location> {
        if !self.has_location(entity) {
            return None;
        }
        Some(Location::new(
            self.latitude(entity),
            self.longitude(entity),
            self.elevation(entity),
        ))
    }
}

impl<T: ?Sized, P: LocationProvider<T> + ?Sized> LocationProvider<T> for &P {
    fn longitude(&self, entity: &T) -> f64 {
        (**self).longitude(entity)
    }

    fn latitude(&self, entity: &T) -> f64 {
        (**self).latitude(entity)
    }

    fn elevation(&self, entity: &T) -> f64 {
        (**self).elevation(entity)
    }

    fn id(&self, entity: &T) -> String {
        (**self).id(entity)
    }

    fn has_location(&self, entity: &T) -> bool {
        (**self).has_location(entity)
    }
}

type Accessor<T, R> = Arc<dyn Fn(&T) -> R + Send + Sync>;

/// A [`LocationProvider`] backed by closures.
///
/// Cheap to clone; clones share the same closures.
pub struct FnLocationProvider<T: ?Sized> {
    latitude: Accessor<T, f64>,
    longitude: Accessor<T, f64>,
    elevation: Option<Accessor<T, f64>>,
    id: Option<Accessor<T, String>>,
    has_location: Option<Accessor<T, bool>>,
}

impl<T: ?Sized> FnLocationProvider<T> {
    /// Returns a builder for a closure backed provider.
    pub fn builder() -> LocationProviderBuilder<T> {
        LocationProviderBuilder::default()
    }
}

impl<T: ?Sized> LocationProvider<T> for FnLocationProvider<T> {
    fn longitude(&self, entity: &T) -> f64 {
        (self.longitude)(entity)
    }

    fn latitude(&self, entity: &T) -> f64 {
        (self.latitude)(entity)
    }

    fn elevation(&self, entity: &T) -> f64 {
        self.elevation.as_ref().map_or(0.0, |f| f(entity))
    }

    fn id(&self, entity: &T) -> String {
        self.id.as_ref().map_or_else(String::new, |f| f(entity))
    }

    fn has_location(&self, entity: &T) -> bool {
        match &self.has_location {
            Some(f) => f(entity),
            None => true,
        }
    }
}

impl<T: ?Sized> Clone for FnLocationProvider<T> {
    fn clone(&self) -> Self {
        Self {
            latitude: Arc::clone(&self.latitude),
            longitude: Arc::clone(&self.longitude),
            elevation: self.elevation.clone(),
            id: self.id.clone(),
            has_location: self.has_location.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for FnLocationProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLocationProvider")
            .field("elevation", &self.elevation.is_some())
            .field("id", &self.id.is_some())
            .field("has_location", &self.has_location.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds a [`FnLocationProvider`].
///
/// The builder can be reused: building again after changing a closure
/// does not affect providers built earlier.
pub struct LocationProviderBuilder<T: ?Sized> {
    latitude: Option<Accessor<T, f64>>,
    longitude: Option<Accessor<T, f64>>,
    elevation: Option<Accessor<T, f64>>,
    id: Option<Accessor<T, String>>,
    has_location: Option<Accessor<T, bool>>,
}

impl<T: ?Sized> Default for LocationProviderBuilder<T> {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            elevation: None,
            id: None,
            has_location: None,
        }
    }
}

impl<T: ?Sized> Clone for LocationProviderBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            elevation: self.elevation.clone(),
            id: self.id.clone(),
            has_location: self.has_location.clone(),
        }
    }
}

impl<T: ?Sized> LocationProviderBuilder<T> {
    /// Sets the latitude accessor. Mandatory.
    pub fn latitude(mut self, f: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.latitude = Some(Arc::new(f));
        self
    }

    /// Sets the longitude accessor. Mandatory.
    pub fn longitude(mut self, f: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.longitude = Some(Arc::new(f));
        self
    }

    /// Sets the elevation accessor. Defaults to 0 metres.
    pub fn elevation(mut self, f: impl Fn(&T) -> f64 + Send + Sync + 'static) -> Self {
        self.elevation = Some(Arc::new(f));
        self
    }

    /// Sets the id accessor. Defaults to an empty string.
    pub fn id(mut self, f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.id = Some(Arc::new(f));
        self
    }

    /// Sets the location presence check. Defaults to always present.
    pub fn has_location(mut self, f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.has_location = Some(Arc::new(f));
        self
    }

    /// Builds the provider.
    ///
    /// # Errors
    /// [`Error::Configuration`] if the latitude or longitude accessor is
    /// missing.
    pub fn build(&self) -> Result<FnLocationProvider<T>> {
        match (&self.latitude, &self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(FnLocationProvider {
                latitude: Arc::clone(latitude),
                longitude: Arc::clone(longitude),
                elevation: self.elevation.clone(),
                id: self.id.clone(),
                has_location: self.has_location.clone(),
            }),
            (latitude, longitude) => {
                let mut missing = Vec::new();
                if latitude.is_none() {
                    missing.push("Latitude provider missing.");
                }
                if longitude.is_none() {
                    missing.push("Longitude provider missing.");
                }
                Err(Error::Configuration(missing.join(" ")))
            }
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
