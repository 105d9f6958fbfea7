//! Recording mock uploader for tests.
//!
//! Only available with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! ytrelay-youtube = { version = "...", features = ["test-utils"] }
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use ytrelay_core::{Error, Result, UploadPlan};

use crate::token::AccessToken;
use crate::transport::ProxyTransport;
use crate::uploader::{MediaFile, VideoUploader};

/// One recorded upload call.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    /// The raw bearer token presented by the handler.
    pub token: String,
    /// The transport selected for the call.
    pub transport: ProxyTransport,
    /// The declared part list, in order.
    pub parts: Vec<String>,
    /// The assembled request body as JSON.
    pub resource: Value,
    /// The media file path.
    pub media_path: PathBuf,
}

/// A [`VideoUploader`] that records every call and never touches the
/// network or the media file.
#[derive(Debug, Clone, Default)]
pub struct RecordingUploader {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Mutex<Vec<RecordedUpload>>,
    video_id: Mutex<String>,
    failure: Mutex<Option<String>>,
}

impl RecordingUploader {
    /// Creates a mock that succeeds with the given video id.
    pub fn new(video_id: impl Into<String>) -> Self {
        let uploader = Self::default();
        *uploader.inner.video_id.lock().unwrap() = video_id.into();
        uploader
    }

    /// Makes every call fail with an upload error carrying this message.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        *self.inner.failure.lock().unwrap() = Some(message.into());
        self
    }

    /// Returns all recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedUpload> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Returns how many times the uploader was invoked.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl VideoUploader for RecordingUploader {
    async fn upload_video(
        &self,
        token: &AccessToken,
        transport: &ProxyTransport,
        plan: &UploadPlan,
        media: &MediaFile,
    ) -> Result<String> {
        let recorded = RecordedUpload {
            token: token.as_str().to_owned(),
            transport: transport.clone(),
            parts: plan.parts().iter().map(|part| part.to_string()).collect(),
            resource: serde_json::to_value(plan.resource())
                .expect("video resource must serialize"),
            media_path: media.path().to_owned(),
        };
        self.inner.calls.lock().unwrap().push(recorded);

        if let Some(message) = self.inner.failure.lock().unwrap().clone() {
            return Err(Error::upload(message));
        }

        Ok(self.inner.video_id.lock().unwrap().clone())
    }
}
