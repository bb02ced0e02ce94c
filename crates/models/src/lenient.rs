//! Field readers for hand-edited content.
//!
//! A single odd value (a `null` section, a rating of `4.5`, a number where a
//! string was expected) must not cost the rest of the document, so each
//! reader takes whatever JSON is there and keeps what it can use.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::content::{ExperienceIcon, TestimonialId, MAX_RATING};

/// Object of text values. Numbers and booleans are kept as their JSON text;
/// other values are dropped. Anything but an object reads as empty.
pub(crate) fn text_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(k, v)| scalar_text(v).map(|s| (k, s)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

/// Array of entries; entries that do not read as `T` are skipped.
pub(crate) fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Any number or numeric string, rounded and clamped to `0..=MAX_RATING`.
pub(crate) fn rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(match n {
        Some(n) if n.is_finite() => n.round().clamp(0.0, f64::from(MAX_RATING)) as u8,
        _ => 0,
    })
}

pub(crate) fn testimonial_id<'de, D>(deserializer: D) -> Result<TestimonialId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_i64() {
            Some(i) => TestimonialId::Number(i),
            None => TestimonialId::Text(n.to_string()),
        },
        Value::String(s) => TestimonialId::Text(s),
        _ => TestimonialId::default(),
    })
}

pub(crate) fn icon<'de, D>(deserializer: D) -> Result<ExperienceIcon, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        tag @ Value::String(_) => serde_json::from_value(tag).unwrap_or_default(),
        _ => ExperienceIcon::Unknown,
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
