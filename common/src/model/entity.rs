//! Point-in-time read of the pending-requests sensor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::RequestRecord;

/// State object of the configured sensor, as found in the host's state table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub entity_id: Option<String>,
    /// Decimal request count published as the sensor state.
    #[serde(default, deserialize_with = "state_string")]
    pub state: String,
    #[serde(default)]
    pub attributes: EntityAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityAttributes {
    /// Render order is list order.
    #[serde(default, deserialize_with = "request_list")]
    pub requests: Option<Vec<RequestRecord>>,
}

impl EntitySnapshot {
    /// Builds a snapshot from a raw state object.
    ///
    /// Records are decoded one by one, so a bad record never hides the others.
    /// Attributes that are not an object are dropped with a warning; the
    /// numeric state is still kept.
    pub fn from_json(value: Value) -> Self {
        match serde_json::from_value::<EntitySnapshot>(value.clone()) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("unreadable entity attributes, rendering without them: {err}");
                EntitySnapshot {
                    entity_id: value.get("entity_id").and_then(Value::as_str).map(str::to_string),
                    state: value.get("state").map(value_to_state).unwrap_or_default(),
                    attributes: EntityAttributes::default(),
                }
            }
        }
    }

    /// Leading integer of `state`, `0` when there is none. Digit runs too long
    /// for an `i64` saturate.
    pub fn request_count(&self) -> i64 {
        leading_integer(&self.state).unwrap_or(0)
    }

    pub fn requests(&self) -> &[RequestRecord] {
        self.attributes.requests.as_deref().unwrap_or_default()
    }

    /// True when there is nothing to show: a zero count or an empty list.
    ///
    /// Either condition is enough, so an empty list with a nonzero state still
    /// renders the empty state.
    pub fn is_empty(&self) -> bool {
        self.request_count() == 0 || self.requests().is_empty()
    }
}

/// Parses an optional sign followed by digits, ignoring anything after them.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits = raw[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len() - sign_len);
    if digits == 0 {
        return None;
    }
    let run = &raw[..sign_len + digits];
    Some(run.parse().unwrap_or(if run.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

fn value_to_state(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Decodes each entry on its own. Entries that are not objects are skipped.
fn request_list<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<RequestRecord>>, D::Error> {
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Ok(None),
        Some(other) => {
            tracing::warn!("requests attribute is not a list: {other}");
            return Ok(None);
        }
    };
    let records = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<RequestRecord>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!("skipping unreadable request at position {index}: {err}");
                None
            }
        })
        .collect();
    Ok(Some(records))
}

fn state_string<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(|value| value_to_state(&value))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_follows_leading_digits() {
        let snapshot = |state: &str| EntitySnapshot {
            state: state.to_string(),
            ..EntitySnapshot::default()
        };
        assert_eq!(snapshot("5").request_count(), 5);
        assert_eq!(snapshot(" 12 requests").request_count(), 12);
        assert_eq!(snapshot("3.9").request_count(), 3);
        assert_eq!(snapshot("unavailable").request_count(), 0);
        assert_eq!(snapshot("").request_count(), 0);
        assert_eq!(snapshot("-").request_count(), 0);
        assert_eq!(snapshot("99999999999999999999").request_count(), i64::MAX);
        assert_eq!(snapshot("-99999999999999999999").request_count(), i64::MIN);
    }

    #[test]
    fn oversized_count_is_not_empty() {
        let snapshot = EntitySnapshot::from_json(json!({
            "state": "99999999999999999999",
            "attributes": {"requests": [{"id": 1}]},
        }));
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn one_bad_record_keeps_the_rest() {
        let snapshot = EntitySnapshot::from_json(json!({
            "state": "3",
            "attributes": {"requests": [
                {"id": 1, "title": "Dune", "requested_by": "alice"},
                {"id": 2, "title": null, "requested_by": null, "runtime": 155.0, "rating": "7.8"},
                "garbage",
                {"id": 3, "title": "Arrival"},
            ]},
        }));
        let ids: Vec<i64> = snapshot.requests().iter().map(|request| request.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn numeric_state_is_accepted() {
        let snapshot = EntitySnapshot::from_json(json!({"state": 2, "attributes": {}}));
        assert_eq!(snapshot.request_count(), 2);
        assert!(snapshot.requests().is_empty());
    }

    #[test]
    fn malformed_request_list_keeps_state() {
        let snapshot = EntitySnapshot::from_json(json!({
            "state": "4",
            "attributes": {"requests": "not a list"},
        }));
        assert_eq!(snapshot.state, "4");
        assert!(snapshot.is_empty());
    }
}
