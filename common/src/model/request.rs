//! Request records as published in the sensor's `requests` attribute.
//!
//! Records are produced by the integration's coordinator and are treated as an
//! opaque upstream payload: every field except `id` is optional, and a missing
//! or unparsable field simply drops the corresponding piece of the item view.

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Kind of media a request is for.
///
/// Upstream sends `"movie"` or `"tv"`; anything that is not `"movie"` is shown
/// as a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    #[default]
    Series,
}

impl MediaType {
    pub fn label(self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::Series => "TV Show",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MediaType::Movie => "mdi:movie",
            MediaType::Series => "mdi:television",
        }
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(kind)) if kind == "movie" => MediaType::Movie,
            _ => MediaType::Series,
        })
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            MediaType::Movie => "movie",
            MediaType::Series => "tv",
        })
    }
}

/// One pending media request.
///
/// Every field decodes leniently: `null` or a value of the wrong type leaves
/// that field empty instead of failing the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Jellyseerr request id. Used as the item key and as the command payload.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub poster_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub requested_by: String,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_genres")]
    pub genres: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_runtime")]
    pub runtime: Option<u32>,
}

impl RequestRecord {
    /// Year of `release_date`, if it parses.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(parse_date).map(|date| date.year())
    }

    /// `created_at` as a local calendar day, formatted `M/D/YYYY`.
    pub fn requested_on(&self) -> Option<String> {
        self.created_at
            .as_deref()
            .and_then(parse_local_date)
            .map(|date| format!("{}/{}/{}", date.month(), date.day(), date.year()))
    }

    /// Overview text ready for display, cut to `max_chars` characters.
    ///
    /// Returns `None` for absent or blank overviews. A cap of `0` disables
    /// truncation.
    pub fn display_overview(&self, max_chars: usize) -> Option<String> {
        let overview = self.overview.as_deref()?.trim();
        if overview.is_empty() {
            return None;
        }
        if max_chars == 0 || overview.chars().count() <= max_chars {
            return Some(overview.to_string());
        }
        let cut: String = overview.chars().take(max_chars).collect();
        Some(format!("{}…", cut.trim_end()))
    }

    /// Rating with one decimal, only when upstream has a positive score.
    pub fn rating_label(&self) -> Option<String> {
        self.rating
            .filter(|rating| rating.is_finite() && *rating > 0.0)
            .map(|rating| format!("{rating:.1}"))
    }

    pub fn runtime_label(&self) -> Option<String> {
        self.runtime.filter(|minutes| *minutes > 0).map(|minutes| format!("{minutes} min"))
    }

    /// Non-empty genre names, in upstream order.
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres
            .iter()
            .flatten()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
            .collect()
    }

    pub fn poster(&self) -> Option<&str> {
        self.poster_url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok())
}

/// Like [`parse_date`], but timestamps land on the viewer's local day.
fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Local).date_naive()),
        Err(_) => parse_date(raw),
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|id| id.fract() == 0.0).map(|id| id as i64))
            .unwrap_or_default(),
        Some(Value::String(text)) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    })
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_runtime<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    let minutes = match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(minutes
        .filter(|minutes| minutes.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(minutes))
        .map(|minutes| minutes as u32))
}

/// Keeps the string entries of a genre list and drops everything else.
fn lenient_genres<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(genre) => Some(genre),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
