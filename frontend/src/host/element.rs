//! Object backing one `jellyseerr-requests-card` element.
//!
//! The custom element defined in `registration` forwards `setConfig`,
//! `set hass` and `getCardSize` here. The Yew app is mounted lazily, on the
//! first state push after a valid configuration, into a single container that
//! lives as long as the element. Teardown belongs to the host.

use std::rc::Rc;

use common::model::descriptor::CARD_SIZE;
use common::model::settings::{normalize, CardConfig, Settings};
use common::ConfigError;
use js_sys::JSON;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};
use yew::AppHandle;

use crate::components::requests::{RequestsCard, RequestsCardProps};
use crate::error::CardError;
use crate::host::hass::HassHost;

#[wasm_bindgen]
pub struct CardElement {
    element: HtmlElement,
    settings: Option<Rc<Settings>>,
    hass: Option<JsValue>,
    app: Option<AppHandle<RequestsCard>>,
}

#[wasm_bindgen]
impl CardElement {
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement) -> CardElement {
        CardElement {
            element,
            settings: None,
            hass: None,
            app: None,
        }
    }

    /// Replaces the settings. Throws when the configuration is rejected.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let settings = parse_config(&config).map_err(|err| {
            tracing::error!("rejected card configuration: {err}");
            JsValue::from(js_sys::Error::new(&err.to_string()))
        })?;
        tracing::info!("configured for {}", settings.entity_id);
        self.settings = Some(Rc::new(settings));
        self.render();
        Ok(())
    }

    /// Receives every state push from the host.
    #[wasm_bindgen(js_name = setHass)]
    pub fn set_hass(&mut self, hass: JsValue) {
        self.hass = Some(hass);
        self.render();
    }

    #[wasm_bindgen(js_name = getCardSize)]
    pub fn get_card_size(&self) -> u32 {
        CARD_SIZE
    }
}

impl CardElement {
    fn render(&mut self) {
        let (Some(settings), Some(hass)) = (self.settings.clone(), self.hass.clone()) else {
            return;
        };

        let host = HassHost::new(hass, self.element.clone());
        let entity = host.entity(&settings.entity_id);
        if entity.is_none() {
            tracing::warn!("entity {} not found", settings.entity_id);
        }
        let props = RequestsCardProps {
            settings,
            entity,
            host,
        };

        match self.app.as_mut() {
            Some(app) => app.update(props),
            None => match self.mount_root() {
                Ok(root) => {
                    self.app = Some(yew::Renderer::<RequestsCard>::with_root_and_props(root, props).render());
                }
                Err(err) => tracing::error!("could not create card root: {err}"),
            },
        }
    }

    fn mount_root(&self) -> Result<Element, CardError> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| CardError::Host("card element has no document".to_string()))?;
        let root = document
            .create_element("div")
            .map_err(|_| CardError::Host("could not create root element".to_string()))?;
        self.element
            .append_child(&root)
            .map_err(|_| CardError::Host("could not attach root element".to_string()))?;
        Ok(root)
    }
}

fn parse_config(config: &JsValue) -> Result<Settings, CardError> {
    let json = JSON::stringify(config)
        .ok()
        .and_then(|json| json.as_string())
        .ok_or_else(|| ConfigError::Malformed("configuration is missing".to_string()))?;
    let raw = CardConfig::from_json(serde_json::from_str(&json)?)?;
    Ok(normalize(&raw)?)
}
