//! Defines the properties for the `RequestsCard`.
//!
//! The host bridge builds a fresh `RequestsCardProps` on every state push from
//! Home Assistant and hands it to the mounted app, which re-renders the card
//! from scratch.

use std::rc::Rc;

use common::model::entity::EntitySnapshot;
use common::model::settings::Settings;
use yew::prelude::*;

use crate::host::hass::HassHost;

/// Properties for the `RequestsCard`.
#[derive(Properties, PartialEq, Clone)]
pub struct RequestsCardProps {
    /// Normalized configuration. Shared with in-flight dispatches.
    pub settings: Rc<Settings>,

    /// State of `settings.entity_id`, or `None` when the host does not know
    /// the entity. Re-checked on every push.
    pub entity: Option<EntitySnapshot>,

    /// Live host used for confirmations, service calls and notifications.
    pub host: HassHost,
}
