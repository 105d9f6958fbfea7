//! Request body size limiting.

use axum::Router;
use axum::extract::DefaultBodyLimit;

/// Maximum accepted request body size: 50 MB.
///
/// The binary video is never part of the request body (it is streamed
/// from local disk), so this bound only has to cover metadata payloads
/// with generous headroom.
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Applies the relay's body size limit to a router.
pub trait RouterBodyLimitExt {
    /// Caps request bodies at [`MAX_BODY_BYTES`].
    #[must_use]
    fn with_body_limit(self) -> Self;
}

impl<S> RouterBodyLimitExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_body_limit(self) -> Self {
        self.layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
    }
}
