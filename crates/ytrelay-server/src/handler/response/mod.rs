//! Response bodies for all handlers.

mod error_response;
mod monitors;
mod videos;

pub use error_response::ErrorResponse;
pub use monitors::HealthResponse;
pub use videos::UploadVideoResponse;
