use std::fmt;

use crate::check::{CheckResult, Correlation};
use crate::history::{HistoryError, HistoryReader};

const NANOS_PER_MILLI: i64 = 1_000_000;

/// Elapsed outage time, in timestamp units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Downtime {
    Elapsed(i64),
    Unknown,
}

impl Downtime {
    pub fn as_millis(self) -> Option<i64> {
        match self {
            Downtime::Elapsed(elapsed) => Some(elapsed / NANOS_PER_MILLI),
            Downtime::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Suppress,
    AlertUnhealthy,
    AlertRecovered { downtime: Downtime },
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Suppress => f.write_str("suppress"),
            Decision::AlertUnhealthy => f.write_str("alert_unhealthy"),
            Decision::AlertRecovered { .. } => f.write_str("alert_recovered"),
        }
    }
}

#[derive(Debug)]
pub struct Transition {
    pub decision: Decision,
    /// Set when the downtime lookup failed; the recovery alert still fires.
    pub lookup_error: Option<HistoryError>,
}

impl Transition {
    fn plain(decision: Decision) -> Self {
        Self {
            decision,
            lookup_error: None,
        }
    }
}

/// Classifies one endpoint's edge between its previous and current observation.
///
/// History is only consulted on the unhealthy → healthy edge.
pub fn decide<R>(current: &CheckResult, previous: Correlation<'_>, reader: &R) -> Transition
where
    R: HistoryReader + ?Sized,
{
    let previous = match previous {
        Correlation::NotFound if current.healthy => return Transition::plain(Decision::Suppress),
        Correlation::NotFound => return Transition::plain(Decision::AlertUnhealthy),
        Correlation::Found(previous) => previous,
    };

    match (previous.healthy, current.healthy) {
        (true, true) | (false, false) => Transition::plain(Decision::Suppress),
        (true, false) => Transition::plain(Decision::AlertUnhealthy),
        (false, true) => recovered(current, reader),
    }
}

fn recovered<R>(current: &CheckResult, reader: &R) -> Transition
where
    R: HistoryReader + ?Sized,
{
    let (downtime, lookup_error) = match reader.find_last_working_time(current) {
        Ok(Some(last_working)) if last_working > 0 && last_working <= current.timestamp => {
            (Downtime::Elapsed(current.timestamp - last_working), None)
        }
        Ok(_) => (Downtime::Unknown, None),
        Err(error) => {
            log::warn!(
                "downtime lookup failed endpoint={} error={}",
                current.endpoint,
                error
            );
            (Downtime::Unknown, Some(error))
        }
    };

    Transition {
        decision: Decision::AlertRecovered { downtime },
        lookup_error,
    }
}
