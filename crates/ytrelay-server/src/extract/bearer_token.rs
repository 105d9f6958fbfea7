//! Bearer token extraction from the `Authorization` header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use ytrelay_youtube::AccessToken;

use crate::handler::{Error, ErrorKind};

/// Extracts the pre-obtained bearer token from the `Authorization` header.
///
/// The relay does not perform any credential-acquisition flow; the token
/// is forwarded as-is to the upload capability. Absent headers reject
/// with a distinct kind from present-but-malformed ones so operators can
/// tell the two apart in logs, though both map to 401.
#[derive(Debug, Clone)]
#[must_use]
pub struct BearerToken(AccessToken);

impl BearerToken {
    /// Consumes the extractor and returns the access token.
    pub fn into_token(self) -> AccessToken {
        self.0
    }

    /// Returns the access token.
    pub fn token(&self) -> &AccessToken {
        &self.0
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Err(ErrorKind::MissingAuthToken.into_error());
        };

        let header = header
            .to_str()
            .map_err(|_| ErrorKind::MalformedAuthToken.into_error())?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ErrorKind::MalformedAuthToken.into_error())?;

        Ok(Self(AccessToken::new(token)))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(value: Option<&str>) -> Result<BearerToken, Error> {
        let mut builder = Request::builder().uri("/upload");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn extracts_bearer_token() {
        let token = extract(Some("Bearer ya29.token")).await.unwrap();
        assert_eq!(token.token().as_str(), "ya29.token");
    }

    #[tokio::test]
    async fn missing_header_is_distinct() {
        let error = extract(None).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingAuthToken);
    }

    #[tokio::test]
    async fn rejects_non_bearer_schemes() {
        let error = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedAuthToken);
    }

    #[tokio::test]
    async fn rejects_empty_token() {
        let error = extract(Some("Bearer ")).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedAuthToken);
    }
}
