//! Nearest Location Library.
//! Finds the points of interest closest to an entity.
//!
//! Entities of unrelated types take part in the search through a
//! [`LocationProvider`], so neither the candidates nor the query need to
//! share a common struct. Distances are great-circle distances adjusted
//! for the elevation difference between two locations.
//!
//! ```
//! use nearest_location::{
//!     FnLocationProvider, LoggingMissingLocationHandler, NearestLocations, PoiLocator,
//! };
//!
//! struct Transformer {
//!     id: &'static str,
//!     lat: f64,
//!     lon: f64,
//! }
//!
//! # fn main() -> nearest_location::Result<()> {
//! let stations = vec![("canberra", -35.28, 149.13), ("sydney", -33.87, 151.21)];
//! let station_locations = FnLocationProvider::<(&str, f64, f64)>::builder()
//!     .latitude(|s| s.1)
//!     .longitude(|s| s.2)
//!     .id(|s| s.0.to_string())
//!     .build()?;
//! let transformer_locations = FnLocationProvider::<Transformer>::builder()
//!     .latitude(|t| t.lat)
//!     .longitude(|t| t.lon)
//!     .id(|t| t.id.to_string())
//!     .build()?;
//!
//! let locator = PoiLocator::new(
//!     stations,
//!     station_locations,
//!     LoggingMissingLocationHandler::default(),
//! );
//! let transformer = Transformer { id: "tr1", lat: -35.35, lon: 149.23 };
//! let nearest = locator.find_nearest(&transformer, &transformer_locations)?;
//! assert_eq!(nearest.map(|s| s.0), Some("canberra"));
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;

mod types {
    pub mod error;
    pub mod handler;
    pub mod location;
    pub mod provider;
}

pub mod utils {
    #[cfg(test)]
    pub mod generator;
    pub mod haversine;
}

mod algorithms {
    pub mod nearest;
}

pub use algorithms::nearest::{NearestLocations, PoiLocator};
pub use types::error::{Error, Result};
pub use types::handler::{LoggingMissingLocationHandler, MissingLocationHandler};
pub use types::location::Location;
pub use types::provider::{FnLocationProvider, LocationProvider, LocationProviderBuilder};
