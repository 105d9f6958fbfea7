//! The uploader seam between the HTTP layer and the remote API.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ytrelay_core::{Error, Result, UploadPlan};

use crate::token::AccessToken;
use crate::transport::ProxyTransport;

/// Default MIME type for the streamed media bytes.
const DEFAULT_MEDIA_CONTENT_TYPE: &str = "application/octet-stream";

/// A local media file verified to exist before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    path: PathBuf,
    len: u64,
    content_type: &'static str,
}

impl MediaFile {
    /// Stats the path and captures the byte length.
    ///
    /// # Errors
    ///
    /// Returns a file-not-found error when the path does not reference an
    /// existing regular file.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let metadata = tokio::fs::metadata(path).await.map_err(|err| {
            Error::file_not_found(format!("no file at: {}", path.display())).with_source(err)
        })?;

        if !metadata.is_file() {
            return Err(Error::file_not_found(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_owned(),
            len: metadata.len(),
            content_type: DEFAULT_MEDIA_CONTENT_TYPE,
        })
    }

    /// Returns the media file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the media byte length.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` when the media file is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the MIME type announced for the media bytes.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }
}

/// The upload capability the HTTP layer depends on.
///
/// One implementor performs the real resumable upload; the `test-utils`
/// mock records calls so handler tests can assert the collaborator was or
/// was not invoked.
#[async_trait]
pub trait VideoUploader: Send + Sync {
    /// Performs one resumable upload and returns the remote video id.
    ///
    /// The call is one-shot: failures surface immediately with no retry.
    async fn upload_video(
        &self,
        token: &AccessToken,
        transport: &ProxyTransport,
        plan: &UploadPlan,
        media: &MediaFile,
    ) -> Result<String>;
}
