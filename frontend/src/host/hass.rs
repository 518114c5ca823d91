//! `CardHost` implementation over the Home Assistant `hass` object.

use std::time::Duration;

use common::model::entity::EntitySnapshot;
use common::model::notification::Notification;
use common::requests::ServiceCall;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};
use yew::platform::spawn_local;

use crate::components::requests::CardHost;
use crate::error::CardError;

/// Event the host listens to for toast notifications.
pub const NOTIFICATION_EVENT: &str = "hass-notification";

/// The live `hass` object plus the card element events are fired from.
#[derive(Clone, PartialEq)]
pub struct HassHost {
    hass: JsValue,
    element: HtmlElement,
}

impl HassHost {
    pub fn new(hass: JsValue, element: HtmlElement) -> Self {
        Self { hass, element }
    }

    /// Reads `hass.states[entity_id]`.
    ///
    /// Returns `None` when the entity is not in the state table.
    pub fn entity(&self, entity_id: &str) -> Option<EntitySnapshot> {
        let states = Reflect::get(&self.hass, &JsValue::from_str("states")).ok()?;
        if states.is_undefined() || states.is_null() {
            return None;
        }
        let state = Reflect::get(&states, &JsValue::from_str(entity_id)).ok()?;
        if state.is_undefined() || state.is_null() {
            return None;
        }

        let raw = JSON::stringify(&state).ok().and_then(|json| json.as_string());
        let parsed = raw.as_deref().map(serde_json::from_str::<serde_json::Value>);
        match parsed {
            Some(Ok(value)) => Some(EntitySnapshot::from_json(value)),
            Some(Err(err)) => {
                tracing::warn!("state of {entity_id} is not valid JSON: {err}");
                Some(EntitySnapshot::default())
            }
            None => {
                tracing::warn!("state of {entity_id} could not be serialized");
                Some(EntitySnapshot::default())
            }
        }
    }

    fn call_service_fn(&self) -> Result<Function, CardError> {
        Reflect::get(&self.hass, &JsValue::from_str("callService"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or_else(|| CardError::Host("hass.callService is not available".to_string()))
    }
}

impl CardHost for HassHost {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    async fn call_service(&self, call: &ServiceCall) -> Result<(), CardError> {
        let call_service = self.call_service_fn()?;
        let data = to_js(&call.data)?;
        let returned = call_service
            .call3(
                &self.hass,
                &JsValue::from_str(call.domain),
                &JsValue::from_str(call.service),
                &data,
            )
            .map_err(|err| CardError::Command(describe_js_error(&err)))?;

        JsFuture::from(Promise::resolve(&returned))
            .await
            .map(|_| ())
            .map_err(|err| CardError::Command(describe_js_error(&err)))
    }

    fn notify(&self, notification: Notification) {
        if let Err(err) = fire_notification(&self.element, &notification) {
            tracing::warn!(
                "could not show notification {:?}: {}",
                notification.message,
                describe_js_error(&err)
            );
        }
    }

    fn schedule_refresh(&self, entity_id: &str, delay: Duration) {
        let host = self.clone();
        let call = ServiceCall::update_entity(entity_id);
        let delay_ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Err(err) = host.call_service(&call).await {
                tracing::warn!("refresh of {} failed: {err}", call.data["entity_id"]);
            }
        });
    }
}

/// Dispatches a bubbling, composed `hass-notification` event from `element`.
pub fn fire_notification(element: &HtmlElement, notification: &Notification) -> Result<(), JsValue> {
    let detail = to_js(notification).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(NOTIFICATION_EVENT, &init)?;
    element.dispatch_event(&event)?;
    Ok(())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, CardError> {
    let json = serde_json::to_string(value)?;
    JSON::parse(&json).map_err(|err| CardError::Host(describe_js_error(&err)))
}

/// Best-effort text for a rejected promise or thrown value.
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
