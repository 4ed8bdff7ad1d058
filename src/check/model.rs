use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One observation of one monitored endpoint, as written by the checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub title: String,
    pub endpoint: String,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: i64,
    pub healthy: bool,
    #[serde(default)]
    pub degraded: bool,
    #[serde(default)]
    pub down: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CheckResult {
    #[cfg(test)]
    pub(crate) fn new(
        endpoint: impl Into<String>,
        title: impl Into<String>,
        healthy: bool,
        timestamp: i64,
    ) -> Self {
        Self {
            title: title.into(),
            endpoint: endpoint.into(),
            timestamp,
            healthy,
            degraded: false,
            down: !healthy,
            message: String::new(),
            extra: Map::new(),
        }
    }

    pub fn status(&self) -> Status {
        if self.healthy {
            Status::Healthy
        } else if self.degraded {
            Status::Degraded
        } else if self.down {
            Status::Down
        } else {
            Status::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Degraded,
    Down,
    Unknown,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Healthy => "healthy",
            Status::Degraded => "degraded",
            Status::Down => "down",
            Status::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}
