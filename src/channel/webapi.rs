use reqwest::Client;
use serde::Serialize;

use crate::check::{CheckResult, Status};
use crate::config::WebApiConfig;

use super::Channel;
use super::error::ChannelError;
use super::http::post_json;
use super::message::{Notification, NotificationKind, Severity};

pub const KIND: &str = "webapi";

/// Generic JSON-over-HTTP delivery.
#[derive(Debug, Clone)]
pub struct WebApiChannel {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Event {
    Unhealthy,
    Recovered,
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    event: Event,
    title: &'a str,
    endpoint: &'a str,
    status: Status,
    severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    downtime_millis: Option<i64>,
    results: [&'a CheckResult; 1],
}

impl WebApiChannel {
    pub fn new(client: Client, config: &WebApiConfig) -> Self {
        Self {
            client,
            url: config.url.clone(),
        }
    }

    fn payload<'a>(notification: &'a Notification) -> Payload<'a> {
        let result = &notification.result;
        let event = match notification.kind {
            NotificationKind::Unhealthy => Event::Unhealthy,
            NotificationKind::Recovered { .. } => Event::Recovered,
        };

        Payload {
            event,
            title: &result.title,
            endpoint: &result.endpoint,
            status: result.status(),
            severity: notification.severity(),
            downtime_millis: notification.downtime_millis(),
            results: [result],
        }
    }
}

impl Channel for WebApiChannel {
    fn kind(&self) -> &'static str {
        KIND
    }

    async fn send(&self, notification: &Notification) -> Result<(), ChannelError> {
        post_json(&self.client, &self.url, &Self::payload(notification)).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::WebApiChannel;
    use crate::channel::{Channel, ChannelError, Notification, build_http_client};
    use crate::check::CheckResult;
    use crate::config::WebApiConfig;
    use crate::transition::{Decision, Downtime};

    fn channel(url: String) -> WebApiChannel {
        let client = build_http_client(Duration::from_secs(5)).expect("client");
        WebApiChannel::new(client, &WebApiConfig { enabled: true, url })
    }

    #[tokio::test]
    async fn posts_event_with_raw_result() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/events")
            .match_body(Matcher::PartialJson(json!({
                "event": "recovered",
                "title": "API",
                "endpoint": "api",
                "status": "healthy",
                "severity": "good",
                "downtime_millis": 42,
            })))
            .with_status(204)
            .create_async()
            .await;

        let mut result = CheckResult::new("api", "API", true, 100_000_000);
        result.extra.insert("threshold".to_string(), json!(250));
        let notification = Notification::from_decision(
            Decision::AlertRecovered {
                downtime: Downtime::Elapsed(42_000_000),
            },
            &result,
        )
        .expect("recovery should notify");

        let payload = serde_json::to_value(WebApiChannel::payload(&notification)).expect("encode");
        assert_eq!(payload["results"][0]["threshold"], 250);
        assert_eq!(payload["results"][0]["timestamp"], 100_000_000);

        channel(format!("{}/events", server.url()))
            .send(&notification)
            .await
            .expect("2xx should succeed");
        mock.assert_async().await;
    }

    #[test]
    fn unknown_downtime_is_omitted() {
        let result = CheckResult::new("api", "API", true, 100);
        let notification = Notification::from_decision(
            Decision::AlertRecovered {
                downtime: Downtime::Unknown,
            },
            &result,
        )
        .expect("recovery should notify");

        let payload = serde_json::to_value(WebApiChannel::payload(&notification)).expect("encode");
        assert!(payload.get("downtime_millis").is_none());
    }

    #[tokio::test]
    async fn server_error_is_rejected_with_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/events")
            .with_status(500)
            .with_body("database is locked")
            .create_async()
            .await;

        let result = CheckResult::new("api", "API", false, 100);
        let error = channel(format!("{}/events", server.url()))
            .send(&Notification::unhealthy(&result))
            .await
            .expect_err("500 should fail");

        assert!(matches!(
            error,
            ChannelError::Rejected { status: 500, ref body } if body.contains("locked")
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let result = CheckResult::new("api", "API", false, 100);
        let error = channel("http://127.0.0.1:9/events".to_string())
            .send(&Notification::unhealthy(&result))
            .await
            .expect_err("closed port should fail");

        assert!(matches!(error, ChannelError::Transport(_)));
    }
}
