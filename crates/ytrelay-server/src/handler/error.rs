//! HTTP error handling for the upload relay.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handler::response::ErrorResponse;

/// The error type for HTTP handlers.
///
/// Wraps an [`ErrorKind`] and optionally overrides the canned `error`
/// message or attaches a `detail` string for the response body.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error {
    kind: ErrorKind,
    message: Option<Cow<'static, str>>,
    detail: Option<Cow<'static, str>>,
}

impl Error {
    /// Creates a new [`Error`] with the specified kind.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            detail: None,
        }
    }

    /// Replaces the canned `error` message in the response body.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    /// Attaches a `detail` string to the response body.
    #[inline]
    pub fn with_detail(self, detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..self
        }
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the custom message if present.
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the detail if present.
    #[inline]
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl Default for Error {
    #[inline]
    fn default() -> Self {
        Self::new(ErrorKind::default())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.kind.response();
        let message = self.message.as_deref().unwrap_or(&response.error);

        write!(f, "{} ({}): {}", self.kind, response.status, message)?;
        if let Some(ref detail) = self.detail {
            write!(f, " - {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let mut response = self.kind.response();

        if let Some(message) = self.message {
            response = response.with_error(message);
        }

        if let Some(detail) = self.detail {
            response = response.with_detail(detail);
        }

        response.into_response()
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ytrelay_core::Error> for Error {
    fn from(err: ytrelay_core::Error) -> Self {
        use ytrelay_core::ErrorKind as CoreKind;

        let message = err.message().to_owned();
        match err.kind() {
            CoreKind::Auth => ErrorKind::MalformedAuthToken.with_detail(message),
            CoreKind::Validation => ErrorKind::Validation.with_detail(message),
            CoreKind::FileNotFound => ErrorKind::FileNotFound.with_detail(message),
            CoreKind::Proxy => ErrorKind::InvalidProxy.with_detail(message),
            CoreKind::Config => ErrorKind::InternalServerError.with_detail(message),
            // The proxy-substring split is a heuristic over remote message
            // text, not a structural code from the remote API.
            CoreKind::Upload if err.is_proxy_related() => {
                ErrorKind::UploadRejected.with_message(message)
            }
            CoreKind::Upload => ErrorKind::UploadFailed.with_message(message),
        }
    }
}

/// A specialized [`Result`] type for HTTP handlers.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Enumeration of the error kinds the relay can surface over HTTP.
#[must_use = "error kinds do nothing unless used to create errors"]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // 4xx Client Errors
    /// 401 Unauthorized - Missing Authorization header
    MissingAuthToken,
    /// 401 Unauthorized - Authorization header present but not a bearer token
    MalformedAuthToken,
    /// 400 Bad Request - Missing or invalid request fields
    Validation,
    /// 400 Bad Request - Media file does not exist
    FileNotFound,
    /// 400 Bad Request - Proxy URL cannot be used
    InvalidProxy,
    /// 400 Bad Request - Remote failure classified as caller-induced
    UploadRejected,
    /// 404 Not Found - Unknown route
    NotFound,

    // 5xx Server Errors
    /// 500 Internal Server Error - Remote upload failure
    UploadFailed,
    /// 500 Internal Server Error - Unexpected server error
    #[default]
    InternalServerError,
}

impl ErrorKind {
    /// Converts this error kind into a full [`Error`].
    #[inline]
    pub fn into_error(self) -> Error {
        Error::new(self)
    }

    /// Creates an [`Error`] with a custom `error` message.
    #[inline]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_message(message)
    }

    /// Creates an [`Error`] with the specified detail.
    #[inline]
    pub fn with_detail(self, detail: impl Into<Cow<'static, str>>) -> Error {
        Error::new(self).with_detail(detail)
    }

    /// Returns the HTTP status code for this error kind.
    #[inline]
    pub fn status_code(self) -> StatusCode {
        self.response().status
    }

    /// Returns the canned response for this error kind.
    #[inline]
    pub fn response(self) -> ErrorResponse {
        match self {
            Self::MissingAuthToken => ErrorResponse::MISSING_AUTH_TOKEN,
            Self::MalformedAuthToken => ErrorResponse::MALFORMED_AUTH_TOKEN,
            Self::Validation => ErrorResponse::VALIDATION,
            Self::FileNotFound => ErrorResponse::FILE_NOT_FOUND,
            Self::InvalidProxy => ErrorResponse::INVALID_PROXY,
            Self::UploadRejected => ErrorResponse::UPLOAD_REJECTED,
            Self::NotFound => ErrorResponse::NOT_FOUND,
            Self::UploadFailed => ErrorResponse::UPLOAD_FAILED,
            Self::InternalServerError => ErrorResponse::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingAuthToken => "missing_auth_token",
            Self::MalformedAuthToken => "malformed_auth_token",
            Self::Validation => "validation",
            Self::FileNotFound => "file_not_found",
            Self::InvalidProxy => "invalid_proxy",
            Self::UploadRejected => "upload_rejected",
            Self::NotFound => "not_found",
            Self::UploadFailed => "upload_failed",
            Self::InternalServerError => "internal_server_error",
        })
    }
}

impl IntoResponse for ErrorKind {
    #[inline]
    fn into_response(self) -> Response {
        self.response().into_response()
    }
}
