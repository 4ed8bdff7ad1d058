use reqwest::Client;
use serde::Serialize;

use crate::config::SlackConfig;

use super::error::ChannelError;
use super::http::post_json;
use super::message::Notification;
use super::Channel;

pub const KIND: &str = "slack";

#[derive(Debug, Clone)]
pub struct SlackChannel {
    client: Client,
    webhook: String,
    username: String,
    channel: String,
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    attachments: Vec<Attachment<'a>>,
}

#[derive(Debug, Serialize)]
struct Attachment<'a> {
    color: &'static str,
    fields: Vec<Field<'a>>,
}

#[derive(Debug, Serialize)]
struct Field<'a> {
    title: &'a str,
    value: String,
}

impl SlackChannel {
    pub fn new(client: Client, config: &SlackConfig) -> Self {
        Self {
            client,
            webhook: config.webhook.clone(),
            username: config.username.clone(),
            channel: config.channel.clone(),
        }
    }

    fn payload<'a>(&'a self, notification: &'a Notification) -> Payload<'a> {
        let result = &notification.result;
        let mut fields = vec![
            Field {
                title: &result.title,
                value: result.endpoint.clone(),
            },
            Field {
                title: "Status",
                value: result.status().to_string(),
            },
        ];

        if let Some(millis) = notification.downtime_millis() {
            fields.push(Field {
                title: "Downtime",
                value: millis.to_string(),
            });
        }

        Payload {
            text: &result.title,
            username: non_empty(&self.username),
            channel: non_empty(&self.channel),
            attachments: vec![Attachment {
                color: notification.severity().as_str(),
                fields,
            }],
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|value| !value.trim().is_empty())
}

impl Channel for SlackChannel {
    fn kind(&self) -> &'static str {
        KIND
    }

    async fn send(&self, notification: &Notification) -> Result<(), ChannelError> {
        post_json(&self.client, &self.webhook, &self.payload(notification)).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::SlackChannel;
    use crate::channel::{Channel, ChannelError, Notification, build_http_client};
    use crate::check::CheckResult;
    use crate::config::SlackConfig;
    use crate::transition::{Decision, Downtime};

    fn channel(webhook: String) -> SlackChannel {
        let client = build_http_client(Duration::from_secs(5)).expect("client");
        SlackChannel::new(
            client,
            &SlackConfig {
                enabled: true,
                webhook,
                username: "checkup".to_string(),
                channel: "#ops".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn recovery_payload_carries_green_color_and_downtime() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "text": "API",
                "username": "checkup",
                "channel": "#ops",
                "attachments": [{
                    "color": "good",
                    "fields": [
                        {"title": "API", "value": "https://api.example.com"},
                        {"title": "Status", "value": "HEALTHY"},
                        {"title": "Downtime", "value": "3000"}
                    ]
                }]
            })))
            .with_status(200)
            .create_async()
            .await;

        let result = CheckResult::new("https://api.example.com", "API", true, 5_000_000_000);
        let notification = Notification::from_decision(
            Decision::AlertRecovered {
                downtime: Downtime::Elapsed(3_000_000_000),
            },
            &result,
        )
        .expect("recovery should notify");

        channel(format!("{}/hook", server.url()))
            .send(&notification)
            .await
            .expect("slack should accept");
        mock.assert_async().await;
    }

    #[test]
    fn unhealthy_payload_has_no_downtime_field() {
        let result = CheckResult::new("https://api.example.com", "API", false, 1000);
        let notification = Notification::unhealthy(&result);
        let slack = channel("http://localhost/hook".to_string());

        let payload = serde_json::to_value(slack.payload(&notification)).expect("encode");
        let fields = payload["attachments"][0]["fields"]
            .as_array()
            .expect("fields array");

        assert_eq!(payload["attachments"][0]["color"], "danger");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1]["value"], "DOWN");
    }

    #[tokio::test]
    async fn non_success_status_is_rejected_with_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/hook")
            .with_status(404)
            .with_body("no_service")
            .create_async()
            .await;

        let result = CheckResult::new("api", "API", false, 1000);
        let error = channel(format!("{}/hook", server.url()))
            .send(&Notification::unhealthy(&result))
            .await
            .expect_err("404 should fail");

        assert!(matches!(
            error,
            ChannelError::Rejected { status: 404, ref body } if body == "no_service"
        ));
    }
}
