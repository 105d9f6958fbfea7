use serde::{Deserialize, Serialize};

/// Body of a successful upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadVideoResponse {
    /// Always `true` in this response shape.
    pub success: bool,
    /// The remote video id.
    pub id: String,
    /// Shareable watch URL for the uploaded video.
    pub url: String,
}

impl UploadVideoResponse {
    /// Creates the response for a fresh video id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let url = format!("https://youtu.be/{id}");
        Self {
            success: true,
            id,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_watch_url() {
        let response = UploadVideoResponse::new("dQw4w9WgXcQ");
        assert!(response.success);
        assert_eq!(response.url, "https://youtu.be/dQw4w9WgXcQ");
    }
}
