//! Errors raised inside the card.

use common::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    /// The card configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A service call was rejected by the host or the backend.
    #[error("service call failed: {0}")]
    Command(String),

    /// The host object did not look the way the card expects.
    #[error("host error: {0}")]
    Host(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
