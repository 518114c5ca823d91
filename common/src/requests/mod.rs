//! Service calls issued by the card through the host's command channel.

use serde::Serialize;
use serde_json::{Value, json};

pub const JELLYSEERR_DOMAIN: &str = "jellyseerr";
pub const HOMEASSISTANT_DOMAIN: &str = "homeassistant";

pub const APPROVE_SERVICE: &str = "approve_request";
pub const DENY_SERVICE: &str = "deny_request";
pub const UPDATE_ENTITY_SERVICE: &str = "update_entity";

/// Reason attached to every deny call. Not configurable.
pub const DENY_REASON: &str = "Denied via Home Assistant";

/// `(domain, service, data)` triple understood by `hass.callService`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCall {
    pub domain: &'static str,
    pub service: &'static str,
    pub data: Value,
}

impl ServiceCall {
    pub fn approve(request_id: i64) -> Self {
        Self {
            domain: JELLYSEERR_DOMAIN,
            service: APPROVE_SERVICE,
            data: json!({ "request_id": request_id }),
        }
    }

    pub fn deny(request_id: i64) -> Self {
        Self {
            domain: JELLYSEERR_DOMAIN,
            service: DENY_SERVICE,
            data: json!({ "request_id": request_id, "reason": DENY_REASON }),
        }
    }

    /// Asks the host to re-poll `entity_id`.
    pub fn update_entity(entity_id: &str) -> Self {
        Self {
            domain: HOMEASSISTANT_DOMAIN,
            service: UPDATE_ENTITY_SERVICE,
            data: json!({ "entity_id": entity_id }),
        }
    }

    /// `request_id` carried by an approve/deny call.
    pub fn request_id(&self) -> Option<i64> {
        self.data.get("request_id").and_then(Value::as_i64)
    }
}
