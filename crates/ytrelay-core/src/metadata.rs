//! Incoming upload metadata.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Video metadata accepted by the upload endpoint.
///
/// All fields are optional at the wire level; required-field checks
/// (`title`) happen during request validation so the caller gets a
/// consistent error shape instead of a deserializer message.
///
/// The five status flags (`embeddable`, `publicStatsViewable`,
/// `madeForKids`, `selfDeclaredMadeForKids`, `containsSyntheticMedia`)
/// use a lenient deserializer: only a JSON boolean is kept. An explicit
/// `false` is forwarded to the API while `null` or a non-boolean value
/// (such as the string `"false"`) is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub default_audio_language: Option<String>,
    #[serde(default)]
    pub localizations: Option<Map<String, Value>>,
    #[serde(default = "default_privacy_status")]
    pub privacy_status: String,
    #[serde(default)]
    pub publish_at: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "boolean_only")]
    pub embeddable: Option<bool>,
    #[serde(default, deserialize_with = "boolean_only")]
    pub public_stats_viewable: Option<bool>,
    #[serde(default, deserialize_with = "boolean_only")]
    pub made_for_kids: Option<bool>,
    #[serde(default, deserialize_with = "boolean_only")]
    pub self_declared_made_for_kids: Option<bool>,
    #[serde(default, deserialize_with = "boolean_only")]
    pub contains_synthetic_media: Option<bool>,
    #[serde(default)]
    pub recording_details: Option<Map<String, Value>>,
    #[serde(default)]
    pub content_details: Option<Map<String, Value>>,
}

/// Default privacy status applied when the caller omits the field.
fn default_privacy_status() -> String {
    "private".to_owned()
}

/// Keeps the value only when it is strictly a JSON boolean.
fn boolean_only<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_bool))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_applied() {
        let metadata: VideoMetadata = serde_json::from_value(json!({ "title": "T" })).unwrap();
        assert_eq!(metadata.title, "T");
        assert_eq!(metadata.description, "");
        assert!(metadata.tags.is_empty());
        assert_eq!(metadata.privacy_status, "private");
        assert!(metadata.embeddable.is_none());
    }

    #[test]
    fn explicit_false_is_kept() {
        let metadata: VideoMetadata =
            serde_json::from_value(json!({ "title": "T", "embeddable": false })).unwrap();
        assert_eq!(metadata.embeddable, Some(false));
    }

    #[test]
    fn non_boolean_flags_are_dropped() {
        let metadata: VideoMetadata = serde_json::from_value(json!({
            "title": "T",
            "embeddable": "false",
            "madeForKids": null,
            "publicStatsViewable": 1,
        }))
        .unwrap();
        assert!(metadata.embeddable.is_none());
        assert!(metadata.made_for_kids.is_none());
        assert!(metadata.public_stats_viewable.is_none());
    }

    #[test]
    fn tag_order_preserved() {
        let metadata: VideoMetadata = serde_json::from_value(json!({
            "title": "T",
            "tags": ["b", "a", "b"],
        }))
        .unwrap();
        assert_eq!(metadata.tags, vec!["b", "a", "b"]);
    }
}
