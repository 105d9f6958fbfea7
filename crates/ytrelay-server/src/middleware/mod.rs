//! Middleware for `axum::Router` and HTTP request processing.

mod body_limit;
mod observability;

pub use body_limit::{MAX_BODY_BYTES, RouterBodyLimitExt};
pub use observability::RouterObservabilityExt;
