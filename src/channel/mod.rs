use std::time::Duration;

use crate::config::Config;

mod error;
mod http;
mod message;
mod slack;
mod webapi;

pub use error::ChannelError;
pub use http::build_http_client;
#[allow(unused_imports)]
pub use message::{Notification, NotificationKind, Severity};
pub use slack::SlackChannel;
pub use webapi::WebApiChannel;

/// Delivery mechanism for a finished notification.
pub trait Channel {
    fn kind(&self) -> &'static str;

    async fn send(&self, notification: &Notification) -> Result<(), ChannelError>;
}

pub enum ActiveChannel {
    Slack(SlackChannel),
    WebApi(WebApiChannel),
}

impl Channel for ActiveChannel {
    fn kind(&self) -> &'static str {
        match self {
            ActiveChannel::Slack(channel) => channel.kind(),
            ActiveChannel::WebApi(channel) => channel.kind(),
        }
    }

    async fn send(&self, notification: &Notification) -> Result<(), ChannelError> {
        match self {
            ActiveChannel::Slack(channel) => channel.send(notification).await,
            ActiveChannel::WebApi(channel) => channel.send(notification).await,
        }
    }
}

/// Every channel enabled in `config`, sharing one HTTP client.
pub fn channels_from_config(config: &Config) -> Result<Vec<ActiveChannel>, ChannelError> {
    let client = build_http_client(Duration::from_secs(config.delivery.timeout_secs))?;
    let mut channels = Vec::new();

    if config.slack.enabled {
        channels.push(ActiveChannel::Slack(SlackChannel::new(
            client.clone(),
            &config.slack,
        )));
    }

    if config.webapi.enabled {
        channels.push(ActiveChannel::WebApi(WebApiChannel::new(
            client,
            &config.webapi,
        )));
    }

    Ok(channels)
}
