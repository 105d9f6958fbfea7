//! Integration tests for the resumable upload client against a local stub
//! of the videos insert endpoint.

use std::collections::HashMap;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::routing::{post, put};
use axum::Router;
use serde_json::{json, Value};
use url::Url;
use ytrelay_core::{ErrorKind, UploadPlan, VideoMetadata};
use ytrelay_youtube::{AccessToken, MediaFile, ProxyTransport, VideoUploader, YouTubeClient};

/// What the stub observed during the initiation round-trip.
#[derive(Debug, Default)]
struct Observed {
    query: HashMap<String, String>,
    metadata: Option<Value>,
}

#[derive(Clone)]
struct StubState {
    base: String,
    observed: Arc<Mutex<Observed>>,
}

async fn initiate(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
    Json(metadata): Json<Value>,
) -> (StatusCode, [(axum::http::HeaderName, String); 1]) {
    let mut observed = state.observed.lock().unwrap();
    observed.query = query;
    observed.metadata = Some(metadata);

    let session = format!("{}/session/abc123", state.base);
    (StatusCode::OK, [(LOCATION, session)])
}

async fn transfer(body: axum::body::Bytes) -> Json<Value> {
    Json(json!({ "id": "vid-42", "receivedBytes": body.len() }))
}

async fn denied() -> (StatusCode, Json<Value>) {
    (
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": {
                "message": "outer message",
                "errors": [{ "message": "Proxy authentication failed" }],
            }
        })),
    )
}

async fn no_location() -> StatusCode {
    StatusCode::OK
}

/// Binds the stub on an ephemeral port and returns its address plus the
/// shared observation state.
async fn spawn_stub() -> anyhow::Result<(SocketAddr, Arc<Mutex<Observed>>)> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let observed = Arc::new(Mutex::new(Observed::default()));
    let state = StubState {
        base: format!("http://{addr}"),
        observed: Arc::clone(&observed),
    };

    let app = Router::new()
        .route("/videos", post(initiate))
        .route("/session/{id}", put(transfer))
        .route("/denied", post(denied))
        .route("/no-location", post(no_location))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    Ok((addr, observed))
}

fn plan() -> UploadPlan {
    let metadata: VideoMetadata = serde_json::from_value(json!({
        "title": "T",
        "recordingDetails": { "recordingDate": "2026-01-01" },
    }))
    .unwrap();
    UploadPlan::from_metadata(&metadata)
}

async fn media_fixture() -> anyhow::Result<(tempfile::NamedTempFile, MediaFile)> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"fake video payload")?;
    let media = MediaFile::open(file.path()).await?;
    Ok((file, media))
}

fn client_for(addr: SocketAddr, path: &str) -> YouTubeClient {
    let endpoint = Url::parse(&format!("http://{addr}{path}")).unwrap();
    YouTubeClient::new().with_endpoint(endpoint)
}

#[tokio::test]
async fn uploads_through_initiate_and_put() -> anyhow::Result<()> {
    let (addr, observed) = spawn_stub().await?;
    let (_guard, media) = media_fixture().await?;

    let client = client_for(addr, "/videos");
    let video_id = client
        .upload_video(
            &AccessToken::new("test-token"),
            &ProxyTransport::Direct,
            &plan(),
            &media,
        )
        .await?;

    assert_eq!(video_id, "vid-42");

    let observed = observed.lock().unwrap();
    assert_eq!(observed.query.get("uploadType").map(String::as_str), Some("resumable"));
    assert_eq!(
        observed.query.get("part").map(String::as_str),
        Some("snippet,status,recordingDetails")
    );

    let metadata = observed.metadata.as_ref().unwrap();
    assert_eq!(metadata["snippet"]["title"], "T");
    assert_eq!(metadata["status"]["privacyStatus"], "private");
    assert_eq!(metadata["recordingDetails"]["recordingDate"], "2026-01-01");
    Ok(())
}

#[tokio::test]
async fn unwraps_remote_error_messages() -> anyhow::Result<()> {
    let (addr, _observed) = spawn_stub().await?;
    let (_guard, media) = media_fixture().await?;

    let client = client_for(addr, "/denied");
    let error = client
        .upload_video(
            &AccessToken::new("test-token"),
            &ProxyTransport::Direct,
            &plan(),
            &media,
        )
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Upload);
    assert_eq!(error.message(), "Proxy authentication failed");
    assert!(error.is_proxy_related());
    Ok(())
}

#[tokio::test]
async fn missing_session_uri_is_an_upload_error() -> anyhow::Result<()> {
    let (addr, _observed) = spawn_stub().await?;
    let (_guard, media) = media_fixture().await?;

    let client = client_for(addr, "/no-location");
    let error = client
        .upload_video(
            &AccessToken::new("test-token"),
            &ProxyTransport::Direct,
            &plan(),
            &media,
        )
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Upload);
    assert!(error.message().contains("session URI"));
    Ok(())
}
