#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod metadata;
mod plan;
mod resource;

pub use error::{BoxedError, Error, ErrorKind, Result};
pub use metadata::VideoMetadata;
pub use plan::UploadPlan;
pub use resource::{Part, Snippet, Status, VideoResource};
