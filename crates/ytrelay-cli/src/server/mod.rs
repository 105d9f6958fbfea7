//! HTTP server startup with lifecycle management.
//!
//! Provides a small API for starting the relay's HTTP server with
//! graceful shutdown on SIGINT/SIGTERM.

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "ytrelay_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "ytrelay_cli::server::shutdown";

mod error;
mod http_server;
mod shutdown;

pub use error::{Result, ServerError};
pub use http_server::serve;
use shutdown::shutdown_signal;
