//! HTTP handlers of the upload relay.

mod error;
mod monitors;
mod videos;

pub mod request;
pub mod response;

pub use crate::handler::error::{Error, ErrorKind, Result};

use axum::Router;
use axum::response::IntoResponse;

use crate::middleware::{RouterBodyLimitExt, RouterObservabilityExt};
use crate::service::ServiceState;

/// Fallback handler for unknown routes.
async fn fallback() -> impl IntoResponse {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all routes and middleware attached.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(monitors::routes())
        .merge(videos::routes())
        .fallback(fallback)
        .with_body_limit()
        .with_observability()
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::Arc;

    use axum_test::TestServer;
    use ytrelay_youtube::mock::RecordingUploader;

    use crate::service::{ServiceConfig, ServiceState};

    /// Spins up an in-process server around a recording mock uploader
    /// that succeeds with the video id `vid-42`.
    pub fn create_test_server() -> anyhow::Result<(TestServer, RecordingUploader)> {
        create_test_server_with(RecordingUploader::new("vid-42"))
    }

    /// Same as [`create_test_server`], except every upload call fails
    /// with an error carrying the given message.
    pub fn create_test_server_failing_with(
        message: &str,
    ) -> anyhow::Result<(TestServer, RecordingUploader)> {
        create_test_server_with(RecordingUploader::new("vid-42").failing_with(message))
    }

    fn create_test_server_with(
        uploader: RecordingUploader,
    ) -> anyhow::Result<(TestServer, RecordingUploader)> {
        let state = ServiceState::with_uploader(
            ServiceConfig::default(),
            Arc::new(uploader.clone()),
        );

        let server = TestServer::new(super::routes().with_state(state))?;
        Ok((server, uploader))
    }

    #[tokio::test]
    async fn unknown_routes_return_not_found() -> anyhow::Result<()> {
        let (server, _uploader) = create_test_server()?;

        let response = server.get("/nope").await;
        response.assert_status_not_found();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"], "resource not found");
        Ok(())
    }
}
