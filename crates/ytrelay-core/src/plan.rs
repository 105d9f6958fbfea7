//! Upload plan assembly.
//!
//! Transforms validated [`VideoMetadata`] into the `part` list and request
//! body of a videos insert call. Assembly is pure: no I/O, no clock, and
//! identical input always yields identical output.

use serde_json::{Map, Value};

use crate::metadata::VideoMetadata;
use crate::resource::{Part, Snippet, Status, VideoResource};

/// The derived upload plan: an ordered `part` list plus the matching body.
///
/// Invariant: a part appears in [`parts`] exactly when its section is
/// populated in [`resource`]. `snippet` and `status` are always present;
/// the optional sections follow in the fixed order `recordingDetails`,
/// `contentDetails`, `localizations`.
///
/// [`parts`]: UploadPlan::parts
/// [`resource`]: UploadPlan::resource
#[derive(Debug, Clone, PartialEq)]
#[must_use = "plans do nothing unless handed to an uploader"]
pub struct UploadPlan {
    parts: Vec<Part>,
    resource: VideoResource,
}

impl UploadPlan {
    /// Assembles the upload plan from validated metadata.
    pub fn from_metadata(metadata: &VideoMetadata) -> Self {
        let snippet = Snippet {
            title: metadata.title.clone(),
            description: metadata.description.clone(),
            tags: metadata.tags.clone(),
            category_id: non_empty_text(&metadata.category_id),
            default_language: non_empty_text(&metadata.default_language),
            default_audio_language: non_empty_text(&metadata.default_audio_language),
        };

        let status = Status {
            privacy_status: metadata.privacy_status.clone(),
            publish_at: non_empty_text(&metadata.publish_at),
            license: non_empty_text(&metadata.license),
            embeddable: metadata.embeddable,
            public_stats_viewable: metadata.public_stats_viewable,
            made_for_kids: metadata.made_for_kids,
            self_declared_made_for_kids: metadata.self_declared_made_for_kids,
            contains_synthetic_media: metadata.contains_synthetic_media,
        };

        let mut parts = vec![Part::Snippet, Part::Status];
        let mut resource = VideoResource {
            snippet,
            status,
            ..VideoResource::default()
        };

        if let Some(details) = non_empty_object(&metadata.recording_details) {
            resource.recording_details = Some(details);
            parts.push(Part::RecordingDetails);
        }

        if let Some(details) = non_empty_object(&metadata.content_details) {
            resource.content_details = Some(details);
            parts.push(Part::ContentDetails);
        }

        if let Some(localizations) = non_empty_object(&metadata.localizations) {
            resource.localizations = Some(localizations);
            parts.push(Part::Localizations);
        }

        Self { parts, resource }
    }

    /// Returns the ordered part list.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Returns the comma-joined part list for the `part` query parameter.
    #[must_use]
    pub fn part_names(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Returns the assembled request body.
    #[must_use]
    pub fn resource(&self) -> &VideoResource {
        &self.resource
    }
}

/// Includes a text field only when it carries a non-empty value.
fn non_empty_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Includes an object section only when it carries at least one key.
fn non_empty_object(value: &Option<Map<String, Value>>) -> Option<Map<String, Value>> {
    value.as_ref().filter(|object| !object.is_empty()).cloned()
}
