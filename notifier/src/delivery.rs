use async_trait::async_trait;
use drift_defs::{DriftEvent, NotificationMessage, NotifierError};
use drift_utils::FormatterConfig;
use log::{debug, error, info};
use reqwest::Client;
use url::Url;

use crate::formatter::{format, format_failure};

#[async_trait]
pub trait WebhookSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), anyhow::Error>;
}

/// Posts messages to a Slack incoming webhook.
pub struct SlackWebhook {
    client: Client,
    url: Url,
}

impl SlackWebhook {
    pub fn new(url: Url) -> Self {
        SlackWebhook {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl WebhookSender for SlackWebhook {
    async fn send(&self, message: &NotificationMessage) -> Result<(), anyhow::Error> {
        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await
            .map_err(|e| NotifierError::WebhookTransport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Webhook responded with {}: {}", status, body);
            return Err(NotifierError::WebhookRejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        debug!("Message delivered with status {}", status);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub skipped: usize,
}

/// Formats and sends one message per record, detection failures first and
/// then stacks, in input order. Stops at the first failed send.
pub async fn deliver(
    event: &DriftEvent,
    config: &FormatterConfig,
    sender: &dyn WebhookSender,
) -> Result<DeliveryReport, anyhow::Error> {
    let mut report = DeliveryReport::default();

    let messages = event
        .detection_failed_stacks
        .iter()
        .map(|failure| (failure.stack_name.as_str(), format_failure(failure)))
        .chain(
            event
                .stacks
                .iter()
                .map(|stack| (stack.stack_name.as_str(), format(stack, config))),
        );

    for (stack_name, message) in messages {
        if message.is_empty() {
            debug!("Nothing to report for stack {}", stack_name);
            report.skipped += 1;
            continue;
        }
        info!("Sending notification for stack {}", stack_name);
        sender.send(&message).await?;
        report.sent += 1;
    }

    Ok(report)
}
