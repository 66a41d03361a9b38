use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body sent to clients when a request fails.
///
/// Serialized as `{"errorMessage": "...", "errorTime": "<RFC 3339>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    #[serde(rename = "errorMessage")]
    pub message: String,
    #[serde(rename = "errorTime")]
    pub timestamp: DateTime<Utc>,
}

impl ErrorReport {
    /// Builds a report stamped with the current instant.
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message, Utc::now())
    }

    pub fn at(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            timestamp,
        }
    }
}
