use serde::Serialize;

use crate::check::CheckResult;
use crate::transition::{Decision, Downtime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Unhealthy,
    Recovered { downtime: Downtime },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Danger => "danger",
        }
    }
}

/// A finished alert, ready for a channel to render and deliver.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub result: CheckResult,
}

impl Notification {
    pub fn unhealthy(result: &CheckResult) -> Self {
        Self {
            kind: NotificationKind::Unhealthy,
            result: result.clone(),
        }
    }

    pub fn from_decision(decision: Decision, result: &CheckResult) -> Option<Self> {
        let kind = match decision {
            Decision::Suppress => return None,
            Decision::AlertUnhealthy => NotificationKind::Unhealthy,
            Decision::AlertRecovered { downtime } => NotificationKind::Recovered { downtime },
        };

        Some(Self {
            kind,
            result: result.clone(),
        })
    }

    pub fn severity(&self) -> Severity {
        if self.result.healthy {
            Severity::Good
        } else {
            Severity::Danger
        }
    }

    pub fn downtime_millis(&self) -> Option<i64> {
        match self.kind {
            NotificationKind::Recovered { downtime } => downtime.as_millis(),
            NotificationKind::Unhealthy => None,
        }
    }
}
