use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// HTTP error response body.
///
/// Serialized as `{"error": "...", "detail": "..."}` with `detail`
/// omitted when absent. The status code is carried alongside, never
/// serialized.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// User-facing error message
    pub error: Cow<'static, str>,
    /// Additional failure detail when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Cow<'static, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl ErrorResponse {
    // 4xx Client Errors
    pub const FILE_NOT_FOUND: Self =
        Self::new("file not found", StatusCode::BAD_REQUEST);
    pub const INVALID_PROXY: Self = Self::new("invalid proxy", StatusCode::BAD_REQUEST);
    pub const MALFORMED_AUTH_TOKEN: Self = Self::new(
        "missing or malformed Authorization header",
        StatusCode::UNAUTHORIZED,
    );
    pub const MISSING_AUTH_TOKEN: Self = Self::new(
        "missing or malformed Authorization header",
        StatusCode::UNAUTHORIZED,
    );
    pub const NOT_FOUND: Self = Self::new("resource not found", StatusCode::NOT_FOUND);
    pub const UPLOAD_REJECTED: Self =
        Self::new("upload rejected by remote service", StatusCode::BAD_REQUEST);
    pub const VALIDATION: Self = Self::new(
        "filePath and title are required",
        StatusCode::BAD_REQUEST,
    );

    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal server error",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const UPLOAD_FAILED: Self =
        Self::new("upload failed", StatusCode::INTERNAL_SERVER_ERROR);

    /// Creates a new error response.
    #[inline]
    pub const fn new(error: &'static str, status: StatusCode) -> Self {
        Self {
            error: Cow::Borrowed(error),
            detail: None,
            status,
        }
    }

    /// Replaces the `error` message.
    pub fn with_error(mut self, error: impl Into<Cow<'static, str>>) -> Self {
        self.error = error.into();
        self
    }

    /// Attaches a `detail` string.
    pub fn with_detail(mut self, detail: impl Into<Cow<'static, str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl Default for ErrorResponse {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
