//! The video resource body sent to the YouTube Data API.
//!
//! Field declaration order matches the canonical section order the relay
//! promises, so serialization is deterministic for identical input.

use serde::Serialize;
use serde_json::{Map, Value};

/// A named section of the remote API's video resource schema.
///
/// Every section present in the request body must also be declared in the
/// `part` query parameter of the insert call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, Serialize,
)]
pub enum Part {
    #[strum(serialize = "snippet")]
    #[serde(rename = "snippet")]
    Snippet,
    #[strum(serialize = "status")]
    #[serde(rename = "status")]
    Status,
    #[strum(serialize = "recordingDetails")]
    #[serde(rename = "recordingDetails")]
    RecordingDetails,
    #[strum(serialize = "contentDetails")]
    #[serde(rename = "contentDetails")]
    ContentDetails,
    #[strum(serialize = "localizations")]
    #[serde(rename = "localizations")]
    Localizations,
}

impl Part {
    /// Returns the wire name of this part.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The `snippet` section: always present, carries at least the title.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_audio_language: Option<String>,
}

/// The `status` section: always present, carries at least the privacy status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub privacy_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_stats_viewable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub made_for_kids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_declared_made_for_kids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_synthetic_media: Option<bool>,
}

/// The assembled request body for the videos insert call.
///
/// Only populated sections are serialized; `snippet` and `status` are
/// unconditional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResource {
    pub snippet: Snippet,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_details: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_details: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<Map<String, Value>>,
}
