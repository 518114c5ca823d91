//! Bridge between the card and the Home Assistant frontend.
//!
//! - `hass`: the live `hass` object as a [`crate::CardHost`].
//! - `element`: the object backing each `jellyseerr-requests-card` element.
//! - `registration`: one-time custom element definition and card picker entry.

pub mod element;
pub mod hass;
pub mod registration;
