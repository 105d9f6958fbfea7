//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig    # Host, port, shutdown
//! └── service: ServiceConfig  # Upload endpoint, timeout
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.

mod server;

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ytrelay_server::service::ServiceConfig;

use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
///
/// Combines all configuration groups for the ytrelay server:
/// - [`ServerConfig`]: Network binding and lifecycle
/// - [`ServiceConfig`]: Remote upload endpoint and timeout
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "ytrelay")]
#[command(about = "Resumable video upload relay server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// Upload relay configuration (endpoint, timeout).
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses
    /// CLI arguments.
    ///
    /// This ensures .env files are loaded before clap parses arguments, so
    /// environment variables from .env can be used as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is
    /// enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        Ok(())
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        self.server.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            upload_endpoint = %self.service.upload_endpoint,
            upload_timeout_secs = ?self.service.upload_timeout,
            "upload relay configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_empty_arguments_with_defaults() {
        let cli = Cli::parse_from(["ytrelay"]);
        assert_eq!(cli.server.port, 3000);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn parses_explicit_arguments() {
        let cli = Cli::parse_from([
            "ytrelay",
            "--port",
            "8080",
            "--upload-endpoint",
            "https://stub.local/videos",
        ]);
        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.service.upload_endpoint, "https://stub.local/videos");
    }
}
