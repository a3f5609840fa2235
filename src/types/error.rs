//! Error types for nearest location lookups.

use thiserror::Error;

use super::location::Location;

/// Result type alias for nearest location operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a location provider or
/// searching for the nearest points of interest.
///
/// A missing location is not an error: it is reported through a
/// [`MissingLocationHandler`](`super::handler::MissingLocationHandler`)
/// and the entity is left out of the result.
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory accessor was not supplied to a location provider
    /// builder.
    #[error("Could not create location provider due to missing arguments. {0}")]
    Configuration(String),

    /// An entity reported a location outside the valid coordinate
    /// ranges.
    #[error(
        "Invalid location for '{id}': lat {}, lon {}, ele {}",
        .location.latitude,
        .location.longitude,
        .location.elevation
    )]
    InvalidLocation {
        /// Id of the offending entity, empty if its provider has none.
        id: String,
        /// The out-of-range location.
        location: Location,
    },
}
