use serde::Deserialize;
use ytrelay_core::VideoMetadata;

/// Body of the upload request.
///
/// The binary video is never embedded here; it is streamed from
/// `filePath` on local disk, an out-of-band placement the caller is
/// responsible for. `filePath` and `title` default to empty strings so
/// required-field checks produce the relay's own validation error
/// instead of a deserializer message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadVideoRequest {
    /// Path to an existing local media file.
    #[serde(default)]
    pub file_path: String,
    /// Video metadata, forwarded as the resource body.
    #[serde(flatten)]
    pub metadata: VideoMetadata,
}

impl UploadVideoRequest {
    /// Returns `true` when the required fields are populated.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.file_path.trim().is_empty() && !self.metadata.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn metadata_is_flattened() {
        let request: UploadVideoRequest = serde_json::from_value(json!({
            "filePath": "/tmp/v.mp4",
            "title": "T",
            "tags": ["a"],
        }))
        .unwrap();

        assert_eq!(request.file_path, "/tmp/v.mp4");
        assert_eq!(request.metadata.title, "T");
        assert_eq!(request.metadata.tags, vec!["a"]);
        assert!(request.has_required_fields());
    }

    #[test]
    fn missing_required_fields_detected() {
        let request: UploadVideoRequest =
            serde_json::from_value(json!({ "title": "T" })).unwrap();
        assert!(!request.has_required_fields());

        let request: UploadVideoRequest =
            serde_json::from_value(json!({ "filePath": "/tmp/v.mp4" })).unwrap();
        assert!(!request.has_required_fields());
    }
}
