//! Request extractors.

mod bearer_token;
mod proxy_header;

pub use bearer_token::BearerToken;
pub use proxy_header::ProxyHeader;
