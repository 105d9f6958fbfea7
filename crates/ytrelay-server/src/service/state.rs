//! Application state and dependency injection.

use std::sync::Arc;
use std::time::Duration;

use url::Url;
use ytrelay_core::{Error, Result};
use ytrelay_youtube::{VideoUploader, YouTubeClient};

use crate::service::ServiceConfig;

/// Shared handle to the upload capability.
pub type UploaderHandle = Arc<dyn VideoUploader>;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    uploader: UploaderHandle,
    config: ServiceConfig,
}

impl std::fmt::Debug for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceState")
            .field("uploader", &"Arc<dyn VideoUploader>")
            .field("config", &self.config)
            .finish()
    }
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Builds the real resumable upload client against the configured
    /// endpoint.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.upload_endpoint).map_err(|err| {
            Error::config(format!(
                "invalid upload endpoint: {}",
                config.upload_endpoint
            ))
            .with_source(err)
        })?;

        let mut client = YouTubeClient::new().with_endpoint(endpoint);
        if let Some(secs) = config.upload_timeout {
            client = client.with_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            uploader: Arc::new(client),
            config: config.clone(),
        })
    }

    /// Creates state around a caller-provided uploader.
    ///
    /// This is the seam tests use to swap in a recording mock.
    pub fn with_uploader(config: ServiceConfig, uploader: UploaderHandle) -> Self {
        Self { uploader, config }
    }

    /// Returns the upload capability.
    #[must_use]
    pub fn uploader(&self) -> &UploaderHandle {
        &self.uploader
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(uploader: UploaderHandle);
impl_di!(config: ServiceConfig);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_builds_real_client() {
        let state = ServiceState::from_config(&ServiceConfig::default());
        assert!(state.is_ok());
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let config = ServiceConfig {
            upload_endpoint: "::not a url::".to_owned(),
            ..ServiceConfig::default()
        };
        let error = ServiceState::from_config(&config).unwrap_err();
        assert_eq!(error.kind(), ytrelay_core::ErrorKind::Config);
    }
}
