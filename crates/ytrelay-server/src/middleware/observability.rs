//! Request tracing.

use axum::Router;
use tower_http::trace::TraceLayer;

/// Applies HTTP request tracing to a router.
pub trait RouterObservabilityExt {
    /// Adds a per-request tracing span with method, path, and status.
    #[must_use]
    fn with_observability(self) -> Self;
}

impl<S> RouterObservabilityExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_observability(self) -> Self {
        self.layer(TraceLayer::new_for_http())
    }
}
