//! Video upload handler.
//!
//! Validation order: bearer token (extractor), required fields, media
//! file existence, proxy transport. Each failure short-circuits before
//! the upload capability is invoked; after validation the handler
//! performs exactly one remote call and surfaces its outcome with no
//! retry.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use ytrelay_core::UploadPlan;
use ytrelay_youtube::{MediaFile, ProxyTransport};

use crate::extract::{BearerToken, ProxyHeader};
use crate::handler::request::UploadVideoRequest;
use crate::handler::response::UploadVideoResponse;
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for upload operations.
const TRACING_TARGET: &str = "ytrelay_server::handler::videos";

/// Relays one resumable upload to the configured video platform.
#[tracing::instrument(skip_all, fields(file_path = %request.file_path))]
async fn upload_video(
    State(state): State<ServiceState>,
    token: BearerToken,
    proxy: ProxyHeader,
    Json(request): Json<UploadVideoRequest>,
) -> Result<Json<UploadVideoResponse>> {
    if !request.has_required_fields() {
        return Err(ErrorKind::Validation.into_error());
    }

    // Checked before any network call so a bad path never burns quota.
    let media = MediaFile::open(&request.file_path).await?;
    let transport = ProxyTransport::parse(proxy.as_deref())?;

    let plan = UploadPlan::from_metadata(&request.metadata);

    tracing::debug!(
        target: TRACING_TARGET,
        parts = %plan.part_names(),
        media_len = media.len(),
        proxied = transport.is_proxied(),
        "relaying upload"
    );

    let video_id = state
        .uploader()
        .upload_video(&token.into_token(), &transport, &plan, &media)
        .await
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %err,
                "remote upload failed"
            );
            err
        })?;

    tracing::info!(
        target: TRACING_TARGET,
        video_id = %video_id,
        "upload relayed"
    );

    Ok(Json(UploadVideoResponse::new(video_id)))
}

/// Returns a [`Router`] with all video upload routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/upload", post(upload_video))
}
