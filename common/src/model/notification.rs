use serde::Serialize;

/// How long a notification stays on screen, in milliseconds.
pub const NOTIFICATION_DURATION_MS: u32 = 3000;

/// Detail payload of the host's `hass-notification` event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub duration: u32,
    pub dismissable: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: NOTIFICATION_DURATION_MS,
            dismissable: true,
        }
    }
}
