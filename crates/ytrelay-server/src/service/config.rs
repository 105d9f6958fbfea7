use serde::{Deserialize, Serialize};

/// Default values for configuration options.
mod defaults {
    /// Default videos insert endpoint.
    pub const UPLOAD_ENDPOINT: &str = "https://www.googleapis.com/upload/youtube/v3/videos";

    /// Default upload endpoint as an owned string for serde.
    pub fn upload_endpoint() -> String {
        UPLOAD_ENDPOINT.to_owned()
    }
}

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// Videos insert endpoint the uploads are relayed to.
    ///
    /// Overridable so tests and staging setups can point the relay at a
    /// stub endpoint.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "UPLOAD_ENDPOINT", default_value = defaults::UPLOAD_ENDPOINT)
    )]
    #[serde(default = "defaults::upload_endpoint")]
    pub upload_endpoint: String,

    /// Optional timeout in seconds applied to each remote upload call.
    ///
    /// When unset, call duration is bounded only by the transport.
    #[cfg_attr(feature = "config", arg(long, env = "UPLOAD_TIMEOUT"))]
    #[serde(default)]
    pub upload_timeout: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upload_endpoint: defaults::upload_endpoint(),
            upload_timeout: None,
        }
    }
}
