//! Jellyseerr requests card for the Home Assistant dashboard.
//!
//! The card lists pending media requests published by the Jellyseerr sensor
//! and lets an operator approve or deny each one. It is compiled to
//! WebAssembly; the start hook installs the panic hook and console logging,
//! defines the `jellyseerr-requests-card` custom element and registers it
//! with the card picker.

use wasm_bindgen::prelude::*;

mod components;
mod error;
mod host;
mod logging;

pub use components::requests::{
    dispatch, escape_html, render_card_markup, CardHost, Msg, RequestsCard, RequestsCardProps,
    REFRESH_DELAY,
};
pub use error::CardError;
pub use host::element::CardElement;
pub use host::hass::HassHost;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();
    host::registration::register();
}
