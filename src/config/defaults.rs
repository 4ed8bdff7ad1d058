use super::schema::{DeliveryConfig, DispatchConfig, HistoryConfig, SlackConfig};

pub(super) fn default_history_dir() -> String {
    "checks".to_string()
}

pub(super) fn default_max_scan_records() -> usize {
    500
}

pub(super) fn default_poll_interval_secs() -> u64 {
    30
}

pub(super) fn default_skip_existing_on_start() -> bool {
    true
}

pub(super) fn default_track_transitions() -> bool {
    true
}

pub(super) fn default_delivery_timeout_secs() -> u64 {
    10
}

pub(super) fn default_slack_username() -> String {
    "checkup".to_string()
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: default_history_dir(),
            max_scan_records: default_max_scan_records(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            skip_existing_on_start: default_skip_existing_on_start(),
            track_transitions: default_track_transitions(),
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_delivery_timeout_secs(),
        }
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            webhook: String::new(),
            username: default_slack_username(),
            channel: String::new(),
        }
    }
}
