//! Proxy transport selection.

use url::Url;
use ytrelay_core::{Error, Result};

/// The transport used to reach the upload endpoint.
///
/// Selected once at request-validation time from the raw proxy URL and
/// injected into the upload call. A URL whose scheme starts with `socks`
/// (case-insensitive) selects the SOCKS variant; any other URL selects the
/// generic HTTP(S) forward-proxy variant; no URL means a direct connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProxyTransport {
    /// Direct connection, no proxy.
    #[default]
    Direct,
    /// HTTP(S) forward proxy.
    Http(Url),
    /// SOCKS proxy.
    Socks(Url),
}

impl ProxyTransport {
    /// Parses the raw proxy URL into a transport.
    ///
    /// An absent or blank value selects [`ProxyTransport::Direct`].
    ///
    /// # Errors
    ///
    /// Returns a proxy error when the value is present but not a valid URL.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::Direct);
        };

        let url = Url::parse(raw)
            .map_err(|err| Error::proxy(format!("invalid proxy url: {raw}")).with_source(err))?;

        let socks = raw.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("socks"));
        if socks {
            Ok(Self::Socks(url))
        } else {
            Ok(Self::Http(url))
        }
    }

    /// Returns `true` when the transport goes through a proxy.
    #[must_use]
    pub fn is_proxied(&self) -> bool {
        !matches!(self, Self::Direct)
    }

    /// Builds the `reqwest` proxy for this transport, if any.
    ///
    /// # Errors
    ///
    /// Returns a proxy error when the URL cannot be turned into a usable
    /// proxy scheme.
    pub fn proxy(&self) -> Result<Option<reqwest::Proxy>> {
        let url = match self {
            Self::Direct => return Ok(None),
            Self::Http(url) | Self::Socks(url) => url,
        };

        let proxy = reqwest::Proxy::all(url.as_str()).map_err(|err| {
            Error::proxy(format!("unusable proxy url: {url}")).with_source(err)
        })?;

        Ok(Some(proxy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytrelay_core::ErrorKind;

    #[test]
    fn absent_or_blank_is_direct() {
        assert_eq!(ProxyTransport::parse(None).unwrap(), ProxyTransport::Direct);
        assert_eq!(
            ProxyTransport::parse(Some("  ")).unwrap(),
            ProxyTransport::Direct
        );
        assert!(!ProxyTransport::Direct.is_proxied());
    }

    #[test]
    fn socks_prefix_selects_socks() {
        let transport = ProxyTransport::parse(Some("socks5://host:1080")).unwrap();
        assert!(matches!(transport, ProxyTransport::Socks(_)));
        assert!(transport.is_proxied());

        let transport = ProxyTransport::parse(Some("SOCKS4://host:1080")).unwrap();
        assert!(matches!(transport, ProxyTransport::Socks(_)));
    }

    #[test]
    fn other_schemes_select_http() {
        let transport = ProxyTransport::parse(Some("http://host:8080")).unwrap();
        assert!(matches!(transport, ProxyTransport::Http(_)));

        let transport = ProxyTransport::parse(Some("https://host:8443")).unwrap();
        assert!(matches!(transport, ProxyTransport::Http(_)));
    }

    #[test]
    fn malformed_url_is_a_proxy_error() {
        let error = ProxyTransport::parse(Some("::not a url::")).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Proxy);
    }

    #[test]
    fn builds_reqwest_proxies() {
        let transport = ProxyTransport::parse(Some("http://host:8080")).unwrap();
        assert!(transport.proxy().unwrap().is_some());

        let transport = ProxyTransport::parse(Some("socks5://host:1080")).unwrap();
        assert!(transport.proxy().unwrap().is_some());

        assert!(ProxyTransport::Direct.proxy().unwrap().is_none());
    }
}
