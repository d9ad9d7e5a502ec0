use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single database connectivity check. Built fresh on every
/// check and embedded in the endpoint envelopes; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectivityResult {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectivityResult {
    /// `server_time` is the value the database itself returned, not the
    /// API host clock.
    pub fn ok(server_time: DateTime<Utc>) -> Self {
        Self {
            connected: true,
            status: Some("Database connection successful".to_string()),
            timestamp: Some(server_time),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            connected: false,
            status: None,
            timestamp: None,
            error: Some(error),
        }
    }
}
