// Delivers the report to a Slack incoming webhook
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    bail,
    Context,
    Result,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{
    StatusCode,
    Url,
};
use serde::Serialize;
use super::Report;
use tracing::debug;

/// Emoji used as the message icon unless configured otherwise.
pub const DEFAULT_ICON_EMOJI: &str = ":bucket:";

/// Body of the webhook request.
#[derive(Debug, Serialize)]
pub struct SlackPayload<'a> {
    /// Channel the message is posted to.
    pub channel: &'a str,

    /// Message text.
    pub text: String,

    /// Emoji shown as the sender's icon.
    pub icon_emoji: &'a str,
}

/// Notifier configuration.
#[derive(Debug)]
pub struct NotifierConfig {
    /// The incoming webhook URL.
    pub webhook_url: String,

    /// Channel the report is posted to.
    pub channel: String,

    /// Emoji shown as the sender's icon.
    pub icon_emoji: String,
}

/// Posts a `Report` to a Slack incoming webhook.
pub struct Notifier {
    client:      reqwest::Client,
    webhook_url: Url,
    channel:     String,
    icon_emoji:  String,
}

impl Notifier {
    /// Return a new `Notifier` with the given `NotifierConfig`.
    pub fn new(config: NotifierConfig) -> Result<Self> {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Return a new `Notifier` sending requests through `client`.
    pub fn with_client(
        config: NotifierConfig,
        client: reqwest::Client,
    ) -> Result<Self> {
        let webhook_url = Url::parse(&config.webhook_url)
            .context("Failed building POST request: invalid webhook URL")?;

        Ok(Self {
            client:      client,
            webhook_url: webhook_url,
            channel:     config.channel,
            icon_emoji:  config.icon_emoji,
        })
    }

    /// Return the webhook payload for `report`.
    pub fn payload(&self, report: &Report) -> SlackPayload<'_> {
        SlackPayload {
            channel:    &self.channel,
            text:       report.message(),
            icon_emoji: &self.icon_emoji,
        }
    }

    /// POST `report` to the webhook.
    ///
    /// Anything other than a `200 OK` is an error. Nothing is retried.
    pub async fn notify(&self, report: &Report) -> Result<()> {
        let payload = serde_json::to_vec(&self.payload(report))
            .context("Failed encoding payload")?;

        debug!("notify: POSTing {} bytes to webhook", payload.len());

        let response = self.client
            .post(self.webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .context("Failed POSTing request")?;

        let status = response.status();

        debug!("notify: Webhook returned {}", status);

        if status != StatusCode::OK {
            bail!("Server returned status code {}", status.as_u16());
        }

        Ok(())
    }
}
