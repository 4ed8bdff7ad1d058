use crate::channel::{Channel, Notification};
use crate::check::{CheckResult, find_previous};
use crate::history::HistoryReader;
use crate::transition::{Decision, decide};

use super::error::{ErrorSet, NotifyError};

/// One non-suppressed decision, ready to be handed to any number of channels.
#[derive(Debug)]
pub struct PlannedAlert<'r> {
    pub result: &'r CheckResult,
    pub decision: Decision,
}

/// Decisions for a whole batch plus the lookup failures hit while making them.
#[derive(Debug, Default)]
pub struct BatchPlan<'r> {
    pub alerts: Vec<PlannedAlert<'r>>,
    pub errors: ErrorSet,
}

/// Correlates every current result with `previous` and decides its alert once.
/// History is consulted at most once per recovery edge, whatever the channel count.
pub fn plan_batch<'r, R>(
    current: &'r [CheckResult],
    previous: &[CheckResult],
    reader: &R,
) -> BatchPlan<'r>
where
    R: HistoryReader + ?Sized,
{
    let mut plan = BatchPlan::default();

    for result in current {
        let transition = decide(result, find_previous(result, previous), reader);

        if let Some(source) = transition.lookup_error {
            plan.errors.push(NotifyError::Lookup {
                endpoint: result.endpoint.clone(),
                source,
            });
        }

        if transition.decision == Decision::Suppress {
            log::debug!("notification_suppressed endpoint={}", result.endpoint);
            continue;
        }

        tracing::info!(
            target: "dispatch",
            endpoint = %result.endpoint,
            status = %result.status(),
            decision = %transition.decision,
            "notification_decision"
        );

        plan.alerts.push(PlannedAlert {
            result,
            decision: transition.decision,
        });
    }

    plan
}

/// Hands alerts to one channel.
pub struct Dispatcher<'a, C> {
    channel: &'a C,
}

impl<'a, C: Channel> Dispatcher<'a, C> {
    pub fn new(channel: &'a C) -> Self {
        Self { channel }
    }

    /// Plans the batch and delivers it to this channel, collecting failures without
    /// stopping at the first one.
    pub async fn process<R>(
        &self,
        current: &[CheckResult],
        previous: &[CheckResult],
        reader: &R,
    ) -> ErrorSet
    where
        R: HistoryReader + ?Sized,
    {
        let plan = plan_batch(current, previous, reader);
        let mut errors = plan.errors;
        errors.extend(self.deliver_planned(&plan.alerts).await);
        errors
    }

    /// Sends already decided alerts. Lookup failures stay with the plan.
    pub async fn deliver_planned(&self, alerts: &[PlannedAlert<'_>]) -> ErrorSet {
        let mut errors = ErrorSet::new();
        for alert in alerts {
            if let Some(notification) = Notification::from_decision(alert.decision, alert.result)
                && let Err(error) = self.deliver(&notification).await
            {
                errors.push(error);
            }
        }
        errors
    }

    /// Single-result flow without history: sends only when `result` is unhealthy.
    pub async fn notify_if_unhealthy(&self, result: &CheckResult) -> Result<(), NotifyError> {
        if result.healthy {
            return Ok(());
        }

        self.deliver(&Notification::unhealthy(result)).await
    }

    /// Sends every unhealthy result in `results`, ignoring previous state.
    pub async fn notify_unhealthy(&self, results: &[CheckResult]) -> ErrorSet {
        let mut errors = ErrorSet::new();
        for result in results {
            if let Err(error) = self.notify_if_unhealthy(result).await {
                errors.push(error);
            }
        }
        errors
    }

    async fn deliver(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.channel.send(notification).await.map_err(|source| {
            log::warn!(
                "notification_failed channel={} endpoint={} error={}",
                self.channel.kind(),
                notification.result.endpoint,
                source
            );
            NotifyError::Channel {
                channel: self.channel.kind(),
                endpoint: notification.result.endpoint.clone(),
                source,
            }
        })
    }
}
