//! Nearest point of interest lookups.
//!
//! A [`PoiLocator`] owns a fixed set of points of interest (POIs) and
//! ranks them by elevation-adjusted distance to a query entity. The POIs
//! and the query can be of different types, each read through its own
//! [`LocationProvider`].
//!
//! The scan is linear in the number of POIs, which suits small to
//! moderate sets.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::types::error::{Error, Result};
use crate::types::handler::{LoggingMissingLocationHandler, MissingLocationHandler};
use crate::types::location::Location;
use crate::types::provider::LocationProvider;

/// Finds the points of interest nearest to an entity.
pub trait NearestLocations<T> {
    /// Finds the `n` POIs nearest to `entity`, ordered from closest to
    /// furthest. POIs at exactly the same distance keep their original
    /// order.
    ///
    /// An entity without a location is reported to the missing location
    /// handler and yields an empty result. The entity is checked even
    /// when `n` is 0, but the POIs are not scanned then.
    ///
    /// # Errors
    /// [`Error::InvalidLocation`] if the entity or any POI has a location
    /// outside the valid coordinate ranges.
    fn find<U, Q>(&self, entity: &U, provider: &Q, n: usize) -> Result<Vec<&T>>
    where
        U: ?Sized,
        Q: LocationProvider<U> + ?Sized;

    /// Finds the single POI nearest to `entity`.
    ///
    /// See [`find`](`NearestLocations::find`).
    fn find_nearest<U, Q>(&self, entity: &U, provider: &Q) -> Result<Option<&T>>
    where
        U: ?Sized,
        Q: LocationProvider<U> + ?Sized,
    {
        Ok(self.find(entity, provider, 1)?.into_iter().next())
    }
}

/// A [`NearestLocations`] implementation over a fixed list of POIs.
///
/// The POIs are deduplicated when the locator is created. Each lookup
/// scans every POI, so POIs whose location changes between lookups are
/// always ranked by their current location.
#[derive(Debug)]
pub struct PoiLocator<T, P, H = LoggingMissingLocationHandler> {
    pois: Vec<T>,
    provider: P,
    handler: H,
}

impl<T, P, H> PoiLocator<T, P, H>
where
    P: LocationProvider<T>,
    H: MissingLocationHandler,
{
    /// Creates a locator over `pois`.
    ///
    /// # Arguments
    /// * `pois` - The points of interest. A POI equal to an earlier one
    ///   is dropped.
    /// * `provider` - Reads locations out of the POIs.
    /// * `handler` - Notified of every entity found without a location.
    pub fn new(pois: impl IntoIterator<Item = T>, provider: P, handler: H) -> Self
    where
        T: PartialEq,
    {
        let mut distinct: Vec<T> = Vec::new();
        for poi in pois {
            if !distinct.contains(&poi) {
                distinct.push(poi);
            }
        }
        debug!("Created POI locator with {} distinct POIs", distinct.len());

        PoiLocator {
            pois: distinct,
            provider,
            handler,
        }
    }

    /// The distinct POIs in their original order.
    pub fn pois(&self) -> &[T] {
        &self.pois
    }

    /// Number of distinct POIs.
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Returns true if there are no POIs.
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    /// The missing location handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<T, P, H> NearestLocations<T> for PoiLocator<T, P, H>
where
    P: LocationProvider<T>,
    H: MissingLocationHandler,
{
    fn find<U, Q>(&self, entity: &U, provider: &Q, n: usize) -> Result<Vec<&T>>
    where
        U: ?Sized,
        Q: LocationProvider<U> + ?Sized,
    {
        let Some(origin) = provider.location(entity) else {
            self.handler.handle(&provider.id(entity), None);
            return Ok(Vec::new());
        };
        if !origin.is_valid() {
            return Err(invalid_location(provider.id(entity), origin));
        }
        if n == 0 {
            return Ok(Vec::new());
        }
        debug!(
            "Finding {} nearest of {} POIs to {:?}",
            n,
            self.pois.len(),
            origin
        );

        let mut nearest = TieGroups::new(n);
        for poi in &self.pois {
            let Some(location) = self.provider.location(poi) else {
                self.handler.handle(&self.provider.id(poi), None);
                continue;
            };
            if !location.is_valid() {
                return Err(invalid_location(self.provider.id(poi), location));
            }
            nearest.offer(origin.squared_distance_to(&location), poi);
        }

        Ok(nearest.into_ranked())
    }
}

fn invalid_location(id: String, location: Location) -> Error {
    warn!("{} has an invalid location: {:?}", id, location);
    Error::InvalidLocation { id, location }
}

//---------------------------------------------------------------
// Private types
//---------------------------------------------------------------

/// The best POIs seen so far, grouped by squared distance.
///
/// At most `capacity` distinct distances are kept. A distance group
/// past the `capacity`-th can never make it into the result because
/// every group before it holds at least one POI, so the worst group is
/// dropped whole once there are too many.
struct TieGroups<'a, T> {
    capacity: usize,
    groups: BTreeMap<OrderedFloat<f64>, Vec<&'a T>>,
}

impl<'a, T> TieGroups<'a, T> {
    fn new(capacity: usize) -> Self {
        TieGroups {
            capacity,
            groups: BTreeMap::new(),
        }
    }

    fn offer(&mut self, squared_distance: f64, poi: &'a T) {
        let key = OrderedFloat(squared_distance);
        let admitted = self.groups.len() < self.capacity
            || matches!(self.groups.last_key_value(), Some((worst, _)) if key <= *worst);
        if !admitted {
            return;
        }

        self.groups.entry(key).or_default().push(poi);
        if self.groups.len() > self.capacity {
            self.groups.pop_last();
        }
    }

    /// Flattens the groups closest first and keeps `capacity` POIs.
    fn into_ranked(self) -> Vec<&'a T> {
        self.groups
            .into_values()
            .flatten()
            .take(self.capacity)
            .collect()
    }
}

//---------------------------------------------------------------
// Unit Tests
//---------------------------------------------------------------
