#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for upload client operations.
pub const TRACING_TARGET_CLIENT: &str = "ytrelay_youtube::client";

mod client;
mod token;
mod transport;
mod uploader;

#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;

pub use client::YouTubeClient;
pub use token::AccessToken;
pub use transport::ProxyTransport;
pub use uploader::{MediaFile, VideoUploader};
