use common::ConfigError;
use common::actions::ActionKind;
use common::model::settings::{CardConfig, normalize};
use serde_json::json;

fn normalize_json(value: serde_json::Value) -> Result<common::model::settings::Settings, ConfigError> {
    normalize(&CardConfig::from_json(value)?)
}

#[test]
fn entity_alone_enables_every_toggle() {
    let settings = normalize_json(json!({"entity": "sensor.x"})).unwrap();

    assert_eq!(settings.entity_id, "sensor.x");
    assert_eq!(settings.title, "Jellyseerr Requests");
    assert!(settings.show_title);
    assert!(settings.show_overview);
    assert!(settings.show_poster);
    assert!(settings.show_year);
    assert!(settings.show_actions);
    assert!(settings.show_button_icons);
    assert!(settings.confirm_actions);
    assert!(settings.show_rating);
    assert!(settings.show_genres);
    assert!(settings.show_runtime);
    assert_eq!(settings.max_overview_length, 250);
    assert_eq!(settings.approve_text, "Accept");
    assert_eq!(settings.deny_text, "Reject");
    assert_eq!(settings.placeholder_image, "");
}

#[test]
fn missing_or_empty_entity_is_rejected() {
    assert_eq!(normalize_json(json!({})), Err(ConfigError::MissingEntity));
    assert_eq!(normalize_json(json!({"entity": ""})), Err(ConfigError::MissingEntity));
    assert_eq!(normalize_json(json!({"entity": null})), Err(ConfigError::MissingEntity));
}

#[test]
fn non_object_config_is_malformed() {
    assert!(matches!(
        normalize_json(json!("sensor.x")),
        Err(ConfigError::Malformed(_))
    ));
    assert!(matches!(
        normalize_json(json!({"entity": 12})),
        Err(ConfigError::Malformed(_))
    ));
}

#[test]
fn missing_entity_message_is_user_facing() {
    assert_eq!(ConfigError::MissingEntity.to_string(), "You need to define an entity");
}

#[test]
fn non_numeric_spacing_falls_back_to_default() {
    let settings = normalize_json(json!({"entity": "sensor.x", "card_spacing": "wide"})).unwrap();
    assert_eq!(settings.card_spacing, 12);

    let settings = normalize_json(json!({"entity": "sensor.x", "max_overview_length": -3})).unwrap();
    assert_eq!(settings.max_overview_length, 250);
}

#[test]
fn host_type_key_is_ignored() {
    let settings = normalize_json(json!({
        "type": "custom:jellyseerr-requests-card",
        "entity": "sensor.x",
        "title": "Pending",
    }))
    .unwrap();
    assert_eq!(settings.title, "Pending");
}

#[test]
fn confirmation_templates_use_configured_text() {
    let settings = normalize_json(json!({
        "entity": "sensor.x",
        "confirm_approve_text": "Let {title} in?",
    }))
    .unwrap();
    assert_eq!(settings.confirm_message(ActionKind::Approve, "Dune"), "Let Dune in?");
    assert_eq!(
        settings.confirm_message(ActionKind::Deny, "Dune"),
        "Deny request for \"Dune\"?"
    );
}

#[test]
fn stub_config_normalizes() {
    let settings = normalize(&CardConfig::stub()).unwrap();
    assert_eq!(settings.entity_id, "sensor.jellyseerr_pending_requests");
    assert_eq!(
        serde_json::to_value(CardConfig::stub()).unwrap(),
        json!({"entity": "sensor.jellyseerr_pending_requests"})
    );
}

#[test]
fn reconfiguration_replaces_settings_wholesale() {
    let first = normalize_json(json!({"entity": "sensor.x", "show_poster": false})).unwrap();
    let second = normalize_json(json!({"entity": "sensor.y"})).unwrap();
    assert!(!first.show_poster);
    assert!(second.show_poster);
    assert_eq!(second.entity_id, "sensor.y");
}
