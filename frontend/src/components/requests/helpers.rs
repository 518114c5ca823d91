//! Utility functions for the requests card.
//!
//! - **Escaping**: every piece of upstream or user-supplied text goes through
//!   [`escape_html`] before it is spliced into the card markup.
//! - **Click resolution**: turning a click anywhere on the card into the
//!   approve/deny target carried by the nearest action button.

use common::actions::ActionTarget;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Escapes special HTML characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entities. Applying it twice
/// double-escapes, so call it exactly once per value at the point where the
/// value enters markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Resolves the action button under a click, if any.
///
/// Reads back the `data-action`, `data-request-id` and `data-title`
/// attributes the renderer wrote on the button. The browser has already
/// decoded the escaped title.
pub fn action_target_from_event(event: &MouseEvent) -> Option<ActionTarget> {
    let clicked = event.target()?.dyn_into::<Element>().ok()?;
    let button = clicked.closest("button[data-action]").ok()??;
    ActionTarget::from_attributes(
        &button.get_attribute("data-action")?,
        &button.get_attribute("data-request-id")?,
        &button.get_attribute("data-title").unwrap_or_default(),
    )
}
