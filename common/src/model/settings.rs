//! Card configuration: the raw declarative object and its normalized form.
//!
//! The host hands the card an untyped configuration object (usually written in
//! YAML by the user). [`normalize`] turns it into an immutable [`Settings`]
//! record. The only hard requirement is a non-empty `entity`; every other
//! option has a default.
//!
//! Policies worth knowing when touching this file:
//! - Boolean flags are enabled unless they are the literal `false`. Strings,
//!   numbers and `null` all count as enabled.
//! - Numeric options accept integers or numeric strings. Anything else falls
//!   back to the default with a warning instead of failing the whole card.
//! - Text options accept strings; numbers and booleans are stringified, other
//!   shapes use the default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actions::ActionKind;
use crate::error::ConfigError;

pub const DEFAULT_TITLE: &str = "Jellyseerr Requests";
pub const DEFAULT_APPROVE_TEXT: &str = "Accept";
pub const DEFAULT_DENY_TEXT: &str = "Reject";
pub const DEFAULT_CONFIRM_APPROVE_TEXT: &str = "Approve request for \"{title}\"?";
pub const DEFAULT_CONFIRM_DENY_TEXT: &str = "Deny request for \"{title}\"?";
pub const DEFAULT_MAX_OVERVIEW_LENGTH: usize = 250;
pub const DEFAULT_CARD_SPACING: u32 = 12;
pub const STUB_ENTITY_ID: &str = "sensor.jellyseerr_pending_requests";

/// The placeholder substituted in confirmation templates.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Raw configuration as supplied by the host.
///
/// Every field is kept as an untyped JSON value so that the normalizer, not
/// serde, decides how lenient to be. Unknown keys (including the host's own
/// `type`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_overview: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_poster: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_year: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_actions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_button_icons: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_actions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_rating: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_genres: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_runtime: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_overview_length: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approve_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_approve_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_deny_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_spacing: Option<Value>,
}

impl CardConfig {
    /// Minimal configuration offered by the card picker.
    pub fn stub() -> Self {
        Self {
            entity: Some(Value::String(STUB_ENTITY_ID.to_string())),
            ..Self::default()
        }
    }

    /// Parses a JSON configuration object.
    pub fn from_json(value: Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::Malformed(
                "configuration must be an object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Normalized, immutable card settings.
///
/// Replaced wholesale on every reconfiguration; never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub entity_id: String,
    pub title: String,
    pub show_title: bool,
    pub show_overview: bool,
    pub show_poster: bool,
    pub show_year: bool,
    pub show_actions: bool,
    pub show_button_icons: bool,
    pub confirm_actions: bool,
    pub show_rating: bool,
    pub show_genres: bool,
    pub show_runtime: bool,
    /// Character cap applied to overviews. `0` disables truncation.
    pub max_overview_length: usize,
    pub approve_text: String,
    pub deny_text: String,
    pub confirm_approve_text: String,
    pub confirm_deny_text: String,
    pub placeholder_image: String,
    /// Gap between request items, in pixels.
    pub card_spacing: u32,
}

impl Settings {
    /// Button label for `kind`.
    pub fn action_label(&self, kind: ActionKind) -> &str {
        match kind {
            ActionKind::Approve => &self.approve_text,
            ActionKind::Deny => &self.deny_text,
        }
    }

    /// Confirmation prompt for `kind`, with `{title}` filled in.
    pub fn confirm_message(&self, kind: ActionKind, title: &str) -> String {
        let template = match kind {
            ActionKind::Approve => &self.confirm_approve_text,
            ActionKind::Deny => &self.confirm_deny_text,
        };
        fill_title(template, title)
    }
}

/// Substitutes the first `{title}` in `template`.
///
/// Only one occurrence is replaced and the inserted title is never scanned
/// again, so a title that itself contains `{title}` is inserted literally.
pub fn fill_title(template: &str, title: &str) -> String {
    template.replacen(TITLE_PLACEHOLDER, title, 1)
}

/// Validates and defaults a configuration object.
pub fn normalize(config: &CardConfig) -> Result<Settings, ConfigError> {
    let entity_id = match &config.entity {
        Some(Value::String(entity)) if !entity.trim().is_empty() => entity.trim().to_string(),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            return Err(ConfigError::MissingEntity);
        }
        Some(other) => {
            return Err(ConfigError::Malformed(format!(
                "entity must be a string, got {other}"
            )));
        }
    };

    Ok(Settings {
        entity_id,
        title: text_or(&config.title, DEFAULT_TITLE),
        show_title: enabled(&config.show_title),
        show_overview: enabled(&config.show_overview),
        show_poster: enabled(&config.show_poster),
        show_year: enabled(&config.show_year),
        show_actions: enabled(&config.show_actions),
        show_button_icons: enabled(&config.show_button_icons),
        confirm_actions: enabled(&config.confirm_actions),
        show_rating: enabled(&config.show_rating),
        show_genres: enabled(&config.show_genres),
        show_runtime: enabled(&config.show_runtime),
        max_overview_length: number_or(
            "max_overview_length",
            &config.max_overview_length,
            DEFAULT_MAX_OVERVIEW_LENGTH as u64,
        ) as usize,
        approve_text: text_or(&config.approve_text, DEFAULT_APPROVE_TEXT),
        deny_text: text_or(&config.deny_text, DEFAULT_DENY_TEXT),
        confirm_approve_text: text_or(&config.confirm_approve_text, DEFAULT_CONFIRM_APPROVE_TEXT),
        confirm_deny_text: text_or(&config.confirm_deny_text, DEFAULT_CONFIRM_DENY_TEXT),
        placeholder_image: text_or(&config.placeholder_image, ""),
        card_spacing: number_or("card_spacing", &config.card_spacing, DEFAULT_CARD_SPACING as u64)
            .min(u32::MAX as u64) as u32,
    })
}

/// Anything but the literal `false` enables a flag.
fn enabled(value: &Option<Value>) -> bool {
    !matches!(value, Some(Value::Bool(false)))
}

fn text_or(value: &Option<Value>, default: &str) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => default.to_string(),
    }
}

fn number_or(key: &str, value: &Option<Value>, default: u64) -> u64 {
    let parsed = match value {
        None | Some(Value::Null) => return default,
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
        Some(_) => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!("ignoring non-numeric {key} {value:?}, using {default}");
        default
    })
}
