//! Request bodies for all handlers.

mod videos;

pub use videos::UploadVideoRequest;
