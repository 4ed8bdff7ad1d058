use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub webapi: WebApiConfig,
}

impl Config {
    pub fn enabled_channel_count(&self) -> usize {
        usize::from(self.slack.enabled) + usize::from(self.webapi.enabled)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_dir")]
    pub dir: String,
    #[serde(default = "default_max_scan_records")]
    pub max_scan_records: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_skip_existing_on_start")]
    pub skip_existing_on_start: bool,
    /// When false every unhealthy result is sent, without comparing to the previous record.
    #[serde(default = "default_track_transitions")]
    pub track_transitions: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_delivery_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub webhook: String,
    #[serde(default = "default_slack_username")]
    pub username: String,
    #[serde(default)]
    pub channel: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebApiConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub url: String,
}
