//! Resumable upload client for the YouTube Data API v3.
//!
//! The upload happens in two HTTP round-trips:
//!
//! 1. **Initiate**: POST the video metadata with `uploadType=resumable`
//!    and the declared `part` list. The `Location` response header carries
//!    a session URI valid for 24 hours.
//! 2. **Upload**: PUT the raw media bytes to the session URI. The response
//!    body is a videos resource whose `id` field is the video id.
//!
//! The HTTP client is built per request because the bearer token and the
//! proxy transport are request-scoped.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use reqwest::{Body, Client, StatusCode};
use serde::Deserialize;
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use url::Url;
use ytrelay_core::{Error, Result, UploadPlan};

use crate::token::AccessToken;
use crate::transport::ProxyTransport;
use crate::uploader::{MediaFile, VideoUploader};
use crate::TRACING_TARGET_CLIENT;

/// Default videos insert endpoint.
const UPLOAD_ENDPOINT: &str = "https://www.googleapis.com/upload/youtube/v3/videos";

/// Resumable upload client.
#[derive(Debug, Clone)]
#[must_use = "clients do nothing unless asked to upload"]
pub struct YouTubeClient {
    endpoint: Url,
    timeout: Option<Duration>,
}

impl YouTubeClient {
    /// Creates a client against the production upload endpoint.
    pub fn new() -> Self {
        let endpoint = Url::parse(UPLOAD_ENDPOINT).expect("default endpoint must parse");
        Self {
            endpoint,
            timeout: None,
        }
    }

    /// Overrides the upload endpoint (used by tests against a local stub).
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Applies an overall timeout to each remote call.
    ///
    /// Without this the call duration is bounded only by the transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the per-request HTTP client for the selected transport.
    fn http_client(&self, transport: &ProxyTransport) -> Result<Client> {
        let mut builder = Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy) = transport.proxy()? {
            builder = builder.proxy(proxy);
        }

        builder
            .build()
            .map_err(|err| Error::proxy("failed to build http client").with_source(err))
    }

    /// Initiates the resumable session and returns the session URI.
    async fn initiate_session(
        &self,
        client: &Client,
        token: &AccessToken,
        plan: &UploadPlan,
        media: &MediaFile,
    ) -> Result<Url> {
        let response = client
            .post(self.endpoint.clone())
            .query(&[
                ("uploadType", "resumable"),
                ("part", plan.part_names().as_str()),
            ])
            .bearer_auth(token.as_str())
            .header("X-Upload-Content-Type", media.content_type())
            .header("X-Upload-Content-Length", media.len())
            .json(plan.resource())
            .send()
            .await
            .map_err(|err| {
                Error::upload(format!("upload initiation failed: {err}")).with_source(err)
            })?;

        if !response.status().is_success() {
            return Err(remote_rejection(response).await);
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                Error::upload("no session URI in upload-initiation response")
            })?;

        Url::parse(location).map_err(|err| {
            Error::upload(format!("malformed session URI: {location}")).with_source(err)
        })
    }

    /// Streams the media bytes to the session URI and returns the video id.
    async fn transfer_media(
        &self,
        client: &Client,
        session_uri: Url,
        media: &MediaFile,
    ) -> Result<String> {
        // The file handle is owned by the request body stream and dropped
        // on every exit path, success or failure.
        let file = File::open(media.path()).await.map_err(|err| {
            Error::file_not_found(format!("no file at: {}", media.path().display()))
                .with_source(err)
        })?;

        let response = client
            .put(session_uri)
            .header(CONTENT_TYPE, media.content_type())
            .header(CONTENT_LENGTH, media.len())
            .body(Body::wrap_stream(ReaderStream::new(file)))
            .send()
            .await
            .map_err(|err| {
                Error::upload(format!("media transfer failed: {err}")).with_source(err)
            })?;

        if !response.status().is_success() {
            return Err(remote_rejection(response).await);
        }

        let resource: InsertedVideo = response.json().await.map_err(|err| {
            Error::upload("unreadable videos resource in upload response").with_source(err)
        })?;

        Ok(resource.id)
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoUploader for YouTubeClient {
    async fn upload_video(
        &self,
        token: &AccessToken,
        transport: &ProxyTransport,
        plan: &UploadPlan,
        media: &MediaFile,
    ) -> Result<String> {
        let client = self.http_client(transport)?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            parts = %plan.part_names(),
            media_len = media.len(),
            proxied = transport.is_proxied(),
            "initiating resumable upload"
        );

        let session_uri = self.initiate_session(&client, token, plan, media).await?;
        let video_id = self.transfer_media(&client, session_uri, media).await?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            video_id = %video_id,
            "resumable upload completed"
        );

        Ok(video_id)
    }
}

/// The subset of the videos resource the relay reads back.
#[derive(Debug, Deserialize)]
struct InsertedVideo {
    id: String,
}

/// Error body shape returned by the Data API.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: ApiError,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Turns a non-success response into an upload error with the most
/// specific message the body offers.
async fn remote_rejection(response: reqwest::Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Error::upload(api_error_message(status, &body))
}

/// Extracts `error.errors[0].message`, then `error.message`, then falls
/// back to the HTTP status line.
fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| {
            parsed
                .error
                .errors
                .into_iter()
                .next()
                .map(|detail| detail.message)
                .or(parsed.error.message)
        })
        .unwrap_or_else(|| format!("upload request failed with status {status}"))
}
