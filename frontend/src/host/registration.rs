//! One-time registration with the host, run from the wasm start hook.
//!
//! Both steps are idempotent: the element is only defined when the tag is
//! still free, and the card picker entry is only pushed when no entry with the
//! same `type` exists. Nothing is ever unregistered.

use common::model::descriptor::{CardDescriptor, CARD_TYPE};
use common::model::settings::CardConfig;
use js_sys::{Function, JSON};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::host::element::CardElement;
use crate::host::hass::describe_js_error;

const DEFINE_ELEMENT: &str = r#"
if (customElements.get(tag)) {
    return false;
}
class JellyseerrRequestsCard extends HTMLElement {
    constructor() {
        super();
        this._card = factory(this);
    }
    setConfig(config) {
        this._card.setConfig(config);
    }
    set hass(hass) {
        this._card.setHass(hass);
    }
    getCardSize() {
        return this._card.getCardSize();
    }
    static getStubConfig() {
        return JSON.parse(stub);
    }
}
customElements.define(tag, JellyseerrRequestsCard);
return true;
"#;

const REGISTER_PICKER_ENTRY: &str = r#"
window.customCards = window.customCards || [];
if (window.customCards.some((card) => card.type === descriptor.type)) {
    return false;
}
window.customCards.push(descriptor);
return true;
"#;

pub fn register() {
    match define_element() {
        Ok(true) => tracing::info!("defined <{CARD_TYPE}>"),
        Ok(false) => tracing::debug!("<{CARD_TYPE}> already defined"),
        Err(err) => tracing::error!("could not define <{CARD_TYPE}>: {err}"),
    }
    match register_picker_entry() {
        Ok(true) => tracing::info!("registered {CARD_TYPE} with the card picker"),
        Ok(false) => tracing::debug!("{CARD_TYPE} already in the card picker"),
        Err(err) => tracing::error!("could not register {CARD_TYPE} with the card picker: {err}"),
    }
}

fn define_element() -> Result<bool, String> {
    let factory = Closure::<dyn Fn(HtmlElement) -> JsValue>::new(|element: HtmlElement| {
        JsValue::from(CardElement::new(element))
    })
    .into_js_value();
    let stub = serde_json::to_string(&CardConfig::stub()).map_err(|err| err.to_string())?;

    Function::new_with_args("tag, factory, stub", DEFINE_ELEMENT)
        .call3(
            &JsValue::NULL,
            &JsValue::from_str(CARD_TYPE),
            &factory,
            &JsValue::from_str(&stub),
        )
        .map(|defined| defined.is_truthy())
        .map_err(|err| describe_js_error(&err))
}

fn register_picker_entry() -> Result<bool, String> {
    let descriptor =
        serde_json::to_string(&CardDescriptor::jellyseerr()).map_err(|err| err.to_string())?;
    let descriptor = JSON::parse(&descriptor).map_err(|err| describe_js_error(&err))?;

    Function::new_with_args("descriptor", REGISTER_PICKER_ENTRY)
        .call1(&JsValue::NULL, &descriptor)
        .map(|registered| registered.is_truthy())
        .map_err(|err| describe_js_error(&err))
}
