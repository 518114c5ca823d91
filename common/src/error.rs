//! Error types for card configuration.

use thiserror::Error;

/// Raised by [`crate::model::settings::normalize`] when the configuration
/// cannot produce a usable card.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// `entity` is absent or empty.
    #[error("You need to define an entity")]
    MissingEntity,

    /// The configuration is not an object or a field has an unusable shape.
    #[error("invalid card configuration: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}
