//! Proxy URL extraction from the `proxy_url` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::handler::{Error, ErrorKind};

/// Name of the header carrying the optional forward-proxy URL.
pub const PROXY_URL_HEADER: &str = "proxy_url";

/// Extracts the raw proxy URL, when present.
///
/// Only presence and UTF-8 validity are checked here; turning the value
/// into a transport happens during request validation so its failure maps
/// to the proxy error kind together with URL parse failures.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ProxyHeader(Option<String>);

impl ProxyHeader {
    /// Returns the raw proxy URL, if one was sent.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for ProxyHeader
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(PROXY_URL_HEADER) else {
            return Ok(Self(None));
        };

        let raw = header.to_str().map_err(|_| {
            ErrorKind::InvalidProxy.with_detail("proxy_url header is not valid UTF-8")
        })?;

        Ok(Self(Some(raw.to_owned())))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(value: Option<&str>) -> Result<ProxyHeader, Error> {
        let mut builder = Request::builder().uri("/upload");
        if let Some(value) = value {
            builder = builder.header(PROXY_URL_HEADER, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        ProxyHeader::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn absent_header_is_none() {
        let header = extract(None).await.unwrap();
        assert!(header.as_deref().is_none());
    }

    #[tokio::test]
    async fn present_header_is_passed_through() {
        let header = extract(Some("socks5://host:1080")).await.unwrap();
        assert_eq!(header.as_deref(), Some("socks5://host:1080"));
    }
}
