//! Crate-wide error types.
//!
//! Every failure the relay can surface falls into one of a small set of
//! categories, kept separate from the HTTP layer so the mapping to status
//! codes stays in one place in `ytrelay-server`.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Type alias for boxed errors that are Send + Sync.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Result type alias for relay operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error kind enumeration for categorizing relay errors.
///
/// Separated from [`Error`] so callers can match on the category without
/// touching the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration-related errors.
    Config,
    /// Missing or malformed bearer credentials.
    Auth,
    /// Missing or invalid request fields.
    Validation,
    /// The media path does not reference an existing regular file.
    FileNotFound,
    /// The proxy URL could not be turned into a usable transport.
    Proxy,
    /// The remote upload call failed.
    Upload,
}

impl ErrorKind {
    /// Returns the error kind as a string for categorization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Auth => "auth",
            Self::Validation => "validation",
            Self::FileNotFound => "file_not_found",
            Self::Proxy => "proxy",
            Self::Upload => "upload",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relay error with structured information.
///
/// Carries the error category, a human-readable message, and an optional
/// source error for chain tracking.
#[derive(Debug, thiserror::Error)]
#[error("{kind} error: {message}")]
pub struct Error {
    /// The error category/type
    kind: ErrorKind,
    /// Human-readable error message
    message: Cow<'static, str>,
    /// Optional underlying error that caused this error
    #[source]
    source: Option<BoxedError>,
}

impl Error {
    /// Creates a new [`Error`].
    #[inline]
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches a source error, enabling error chain tracking.
    #[inline]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` when the failure is proxy-related.
    ///
    /// Besides the structural [`ErrorKind::Proxy`] case this also matches
    /// remote failures whose message mentions "proxy". The substring match
    /// is a heuristic carried over from the upstream API, which reports
    /// proxy misconfiguration only in free-form message text, so it must
    /// not be relied on for programmatic branching beyond status mapping.
    #[must_use]
    pub fn is_proxy_related(&self) -> bool {
        matches!(self.kind, ErrorKind::Proxy) || self.message.to_lowercase().contains("proxy")
    }

    /// Creates a new configuration error.
    #[inline]
    pub fn config(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// Creates a new authentication error.
    #[inline]
    pub fn auth(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Auth, message)
    }

    /// Creates a new request validation error.
    #[inline]
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates a new missing-file error.
    #[inline]
    pub fn file_not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::FileNotFound, message)
    }

    /// Creates a new proxy transport error.
    #[inline]
    pub fn proxy(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Proxy, message)
    }

    /// Creates a new remote upload error.
    #[inline]
    pub fn upload(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Upload, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_creation() {
        let error = Error::validation("filePath and title are required");
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.message(), "filePath and title are required");
    }

    #[test]
    fn error_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::file_not_found("no file at /tmp/v.mp4").with_source(source);

        assert!(StdError::source(&error).is_some());
        assert_eq!(error.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn proxy_heuristic() {
        assert!(Error::proxy("bad proxy url").is_proxy_related());
        assert!(Error::upload("tunnel to Proxy failed").is_proxy_related());
        assert!(!Error::upload("quota exceeded").is_proxy_related());
    }

    #[test]
    fn error_kind_as_str() {
        assert_eq!(ErrorKind::Config.as_str(), "config");
        assert_eq!(ErrorKind::Auth.as_str(), "auth");
        assert_eq!(ErrorKind::Validation.as_str(), "validation");
        assert_eq!(ErrorKind::FileNotFound.as_str(), "file_not_found");
        assert_eq!(ErrorKind::Proxy.as_str(), "proxy");
        assert_eq!(ErrorKind::Upload.as_str(), "upload");
    }
}
