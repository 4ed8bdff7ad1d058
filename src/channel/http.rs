use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use super::error::ChannelError;

const USER_AGENT: &str = concat!("downtime_notifier/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client(timeout: Duration) -> Result<Client, ChannelError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(ChannelError::Client)
}

/// POSTs `payload` as JSON; any non-2xx answer is a rejection carrying the response body.
pub(super) async fn post_json<T: Serialize>(
    client: &Client,
    url: &str,
    payload: &T,
) -> Result<(), ChannelError> {
    let body = serde_json::to_vec(payload).map_err(ChannelError::Encoding)?;

    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(ChannelError::Transport)?;

    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|error| format!("<unreadable body: {error}>"));
    Err(ChannelError::Rejected {
        status: status.as_u16(),
        body,
    })
}
