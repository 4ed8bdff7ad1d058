use thiserror::Error;

use super::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read notifier config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse notifier config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid notifier config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "history.dir must not be empty".to_string(),
            ));
        }
        if self.history.max_scan_records == 0 {
            return Err(ConfigError::Validation(
                "history.max_scan_records must be greater than 0".to_string(),
            ));
        }
        if self.dispatch.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "dispatch.poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.delivery.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "delivery.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.slack.enabled {
            validate_http_url("slack.webhook", &self.slack.webhook)?;
        }
        if self.webapi.enabled {
            validate_http_url("webapi.url", &self.webapi.url)?;
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{} must not be empty when the channel is enabled",
            field
        )));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Validation(format!(
            "{} must be an http or https url",
            field
        )));
    }
    Ok(())
}
