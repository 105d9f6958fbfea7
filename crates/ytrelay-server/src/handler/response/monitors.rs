use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Body of the health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving requests.
    pub status: String,
    /// Unix epoch milliseconds at response time.
    pub timestamp: i64,
}

impl HealthResponse {
    /// Creates a healthy response stamped with the current time.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
            timestamp: Timestamp::now().as_millisecond(),
        }
    }
}
