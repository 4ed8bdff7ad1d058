use chrono::Utc;
use tokio::time::{Duration, sleep};

use crate::app_context::AppContext;
use crate::dispatch::{Dispatcher, ErrorSet, plan_batch};
use crate::history::{HistoryError, HistoryReader, newest_records};

#[derive(Debug)]
pub(super) enum CycleOutcome {
    Empty,
    AlreadyProcessed,
    Missing {
        record: String,
    },
    Dispatched {
        record: String,
        results: usize,
        errors: ErrorSet,
    },
}

/// Remembers the newest stored record as handled so a restart does not resend its edges.
pub async fn mark_existing_processed(
    app_context: &AppContext,
) -> Result<Option<String>, HistoryError> {
    let index = app_context.history.list_index()?;
    let newest = newest_records(&index, 1).into_iter().next().map(|(name, _)| name);

    *app_context.last_processed.lock().await = newest.clone();
    Ok(newest)
}

pub(super) async fn run_dispatch_cycle(
    app_context: &AppContext,
) -> Result<CycleOutcome, HistoryError> {
    let history = app_context.history.as_ref();
    let index = history.list_index()?;
    let newest = newest_records(&index, 2);

    let Some((current_name, _)) = newest.first() else {
        return Ok(CycleOutcome::Empty);
    };

    if app_context.last_processed.lock().await.as_deref() == Some(current_name.as_str()) {
        return Ok(CycleOutcome::AlreadyProcessed);
    }

    let current = match history.fetch(current_name) {
        Ok(results) => results,
        Err(HistoryError::NotFound { name }) => {
            log::warn!("newest history record missing, skipping name={}", name);
            *app_context.last_processed.lock().await = Some(current_name.clone());
            return Ok(CycleOutcome::Missing {
                record: current_name.clone(),
            });
        }
        Err(error) => return Err(error),
    };
    let track_transitions = app_context.config.dispatch.track_transitions;
    let previous = match newest.get(1) {
        _ if !track_transitions => Vec::new(),
        Some((previous_name, _)) => match history.fetch(previous_name) {
            Ok(results) => results,
            Err(HistoryError::NotFound { name }) => {
                log::warn!("previous history record missing name={}", name);
                Vec::new()
            }
            Err(error) => return Err(error),
        },
        None => Vec::new(),
    };

    let mut errors = ErrorSet::new();
    if track_transitions {
        let plan = plan_batch(&current, &previous, history);
        errors.extend(plan.errors);
        for channel in app_context.channels.iter() {
            errors.extend(Dispatcher::new(channel).deliver_planned(&plan.alerts).await);
        }
    } else {
        for channel in app_context.channels.iter() {
            errors.extend(Dispatcher::new(channel).notify_unhealthy(&current).await);
        }
    }

    *app_context.last_processed.lock().await = Some(current_name.clone());

    Ok(CycleOutcome::Dispatched {
        record: current_name.clone(),
        results: current.len(),
        errors,
    })
}

/// A tick later than twice the poll interval is reported as delayed.
fn delay_threshold_secs(poll_interval_secs: u64) -> i64 {
    i64::try_from(poll_interval_secs.saturating_mul(2)).unwrap_or(i64::MAX)
}

pub(super) fn start_history_poll_job(app_context: AppContext) {
    tokio::spawn(async move {
        let poll_interval_secs = app_context.config.dispatch.poll_interval_secs;
        let mut previous_tick = None;

        loop {
            let now = Utc::now();
            if let Some(previous) = previous_tick {
                let elapsed_secs = now.signed_duration_since(previous).num_seconds().max(0);
                let threshold_secs = delay_threshold_secs(poll_interval_secs);
                if elapsed_secs > threshold_secs {
                    log::warn!(
                        "history_poll_delayed elapsed_secs={} threshold_secs={}",
                        elapsed_secs,
                        threshold_secs
                    );
                }
            }
            previous_tick = Some(now);

            match run_dispatch_cycle(&app_context).await {
                Ok(CycleOutcome::Dispatched {
                    record,
                    results,
                    errors,
                }) => {
                    tracing::info!(
                        target: "history_poll",
                        record = %record,
                        results,
                        channels = app_context.channels.len(),
                        failures = errors.len(),
                        "dispatch_cycle_completed"
                    );
                    if let Err(errors) = errors.into_result() {
                        for error in errors.iter() {
                            log::debug!(
                                "dispatch_cycle_failure record={} kind={:?} endpoint={}",
                                record,
                                error.kind(),
                                error.endpoint()
                            );
                        }
                        log::warn!("dispatch_cycle_partial_failure record={} {}", record, errors);
                    }
                }
                Ok(CycleOutcome::Missing { record }) => {
                    log::debug!("dispatch_cycle_skipped record={} reason=missing", record);
                }
                Ok(CycleOutcome::Empty | CycleOutcome::AlreadyProcessed) => {}
                Err(error) => {
                    log::error!("history read failed: {}", error);
                }
            }

            tokio::select! {
                _ = sleep(Duration::from_secs(poll_interval_secs)) => {}
                _ = app_context.index_update_notify.notified() => {
                    log::debug!("history_poll_woken reason=index_update");
                }
            }
        }
    });
}
