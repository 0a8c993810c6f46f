//! Value types shared by several backend records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decodes a list field without ever failing the surrounding record.
///
/// Anything but an array is an empty list. Rows that do not decode are
/// dropped with a warning so the rest still render.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(rows) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(error) => {
                tracing::warn!(%error, "Skipping undecodable row");
                None
            }
        })
        .collect())
}

/// Opaque record identifier as the backend emits it.
///
/// Usually shaped `{ "tb": "...", "id": { "String": "..." } }`, sometimes a
/// bare string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Value);

impl RecordId {
    /// The human-facing key: `id.String` when present, else a bare string id.
    pub fn display_id(&self) -> Option<String> {
        if let Some(inner) = self.0.pointer("/id/String").and_then(Value::as_str) {
            return Some(inner.to_string());
        }
        match &self.0 {
            Value::String(raw) if !raw.is_empty() => Some(raw.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    pub fn display_or_na(&self) -> String {
        self.display_id().unwrap_or_else(|| "N/A".to_string())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Backend timestamp: an RFC 3339 string or Unix milliseconds.
///
/// Missing or oddly shaped values land in `Other` and render as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    EpochMillis(i64),
    Text(String),
    Other(Value),
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

impl Timestamp {
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::EpochMillis(millis) => DateTime::from_timestamp_millis(*millis),
            Self::Text(raw) => DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|parsed| parsed.with_timezone(&Utc)),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for Timestamp {
    /// `Jan 5, 2024, 03:04 PM` (UTC); unparseable values print verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.parse(), self) {
            (Some(parsed), _) => write!(f, "{}", parsed.format("%b %-d, %Y, %I:%M %p")),
            (None, Self::Text(raw)) => f.write_str(raw),
            (None, Self::EpochMillis(millis)) => write!(f, "{millis}"),
            (None, Self::Other(_)) => f.write_str("N/A"),
        }
    }
}

/// Colour family used when rendering a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Yellow,
    Red,
    Blue,
    Purple,
    Neutral,
}
