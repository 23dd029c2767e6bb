//! `deserialize_with` helpers for untrusted JSON.
//!
//! Every helper accepts any JSON value and degrades to an empty default
//! instead of failing, so one malformed field never rejects a whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Strings and scalars become text; empty text, `null`, arrays and objects
/// become `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(value).filter(|s| !s.is_empty()))
}

/// Array entries become items (non-scalars dropped); a lone string becomes a
/// single item.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        Value::String(s) if !s.is_empty() => vec![s],
        _ => Vec::new(),
    })
}

/// Like [`string_list`], but a lone string is treated as comma-separated.
pub fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(scalar_text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        Value::String(s) => split_tags(&s),
        _ => Vec::new(),
    })
}

/// Each array entry is decoded on its own; entries that do not decode become
/// `T::default()`. Anything but an array is an empty list.
pub fn record_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(record_or_default).collect(),
        _ => Vec::new(),
    })
}

pub fn record_or_default<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_default()
}

/// Splits comma-joined tag text: trim every segment, drop the empty ones.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_string")]
        title: Option<String>,
        #[serde(default, deserialize_with = "tag_list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "string_list")]
        bullets: Vec<String>,
    }

    #[test]
    fn split_tags_trims_and_drops_empty_segments() {
        assert_eq!(split_tags("a, b ,, c"), vec!["a", "b", "c"]);
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn wrong_types_degrade_to_defaults() {
        let s: Sample = serde_json::from_value(json!({
            "title": {"nested": true},
            "tags": 12,
            "bullets": null
        }))
        .unwrap();

        assert_eq!(s.title, None);
        assert!(s.tags.is_empty());
        assert!(s.bullets.is_empty());
    }

    #[test]
    fn tags_accept_string_or_array() {
        let from_str: Sample = serde_json::from_value(json!({"tags": "Rust, FPGA"})).unwrap();
        let from_arr: Sample =
            serde_json::from_value(json!({"tags": ["Rust", 3, null, " FPGA "]})).unwrap();

        assert_eq!(from_str.tags, vec!["Rust", "FPGA"]);
        assert_eq!(from_arr.tags, vec!["Rust", "3", "FPGA"]);
    }

    #[test]
    fn single_bullet_string_becomes_one_item() {
        let s: Sample = serde_json::from_value(json!({"bullets": "only one"})).unwrap();
        assert_eq!(s.bullets, vec!["only one"]);
    }

    #[test]
    fn empty_title_is_none() {
        let s: Sample = serde_json::from_value(json!({"title": ""})).unwrap();
        assert_eq!(s.title, None);
    }

    #[test]
    fn non_object_record_is_default() {
        let s: Sample = record_or_default(json!(7));
        assert_eq!(s.title, None);
        assert!(s.tags.is_empty());
    }
}
