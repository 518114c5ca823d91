//! Host-independent model shared by the Jellyseerr requests card.
//!
//! Everything in this crate is plain data plus pure functions so it can be
//! exercised natively, without a browser:
//! - `model`: card configuration and its normalizer, entity snapshots,
//!   request records, notifications and the card picker descriptor.
//! - `requests`: payloads for the service calls the card issues.
//! - `actions`: approve/deny targets and per-click outcomes.

pub mod actions;
pub mod error;
pub mod model;
pub mod requests;

pub use error::ConfigError;
