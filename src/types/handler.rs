//! Notification side channel for entities that have no location.
//!
//! A lookup never fails because an entity lacks a location. Instead
//! the entity's id is handed to a [`MissingLocationHandler`] and the
//! entity is skipped.

use std::error::Error as StdError;

/// Receives the id of every entity found without location data.
///
/// Implementations must not panic. Any closure with the signature of
/// [`handle`](`MissingLocationHandler::handle`) is a handler.
pub trait MissingLocationHandler {
    /// Called once per entity lacking a location.
    ///
    /// # Arguments
    /// * `id` - The id reported by the entity's location provider.
    /// * `cause` - The underlying error, if one is known.
    fn handle(&self, id: &str, cause: Option<&(dyn StdError + 'static)>);
}

impl<F> MissingLocationHandler for F
where
    F: Fn(&str, Option<&(dyn StdError + 'static)>),
{
    fn handle(&self, id: &str, cause: Option<&(dyn StdError + 'static)>) {
        self(id, cause)
    }
}

/// Logs a warning through the [`log`] facade for each entity without a
/// location.
#[derive(Debug, Clone)]
pub struct LoggingMissingLocationHandler {
    target: String,
}

impl LoggingMissingLocationHandler {
    /// Creates a handler that logs under the given target.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The log target the warnings are emitted under.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LoggingMissingLocationHandler {
    fn default() -> Self {
        Self::new(module_path!())
    }
}

impl MissingLocationHandler for LoggingMissingLocationHandler {
    fn handle(&self, id: &str, cause: Option<&(dyn StdError + 'static)>) {
        let target = self.target.as_str();
        if let Some(cause) = cause {
            warn!(target: target, "{} does not have location data: {}", id, cause);
        } else {
            warn!(target: target, "{} does not have location data", id);
        }
    }
}
