use drift_defs::{DriftEvent, FunctionResponse};
use drift_utils::NotifierConfig;
use log::{error, info};
use serde_json::Value;

use crate::delivery::{deliver, SlackWebhook, WebhookSender};

/// Configuration and webhook client shared by every invocation of a warm
/// Lambda container.
pub struct Notifier<S: WebhookSender> {
    config: NotifierConfig,
    sender: S,
}

impl Notifier<SlackWebhook> {
    pub fn from_config(config: NotifierConfig) -> Self {
        let sender = SlackWebhook::new(config.webhook_url.clone());
        Notifier { config, sender }
    }
}

impl<S: WebhookSender> Notifier<S> {
    pub fn new(config: NotifierConfig, sender: S) -> Self {
        Notifier { config, sender }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Entry point for the raw Lambda payload. A payload that does not match
    /// the event shape fails the invocation like any other error.
    pub async fn handle_payload(&self, payload: Value) -> Result<FunctionResponse, anyhow::Error> {
        let event: DriftEvent = match serde_json::from_value(payload) {
            Ok(event) => event,
            Err(e) => {
                error!("Unexpected error: invalid drift event: {}", e);
                return Err(anyhow::anyhow!("Invalid drift event: {}", e));
            }
        };

        self.handle(event).await
    }

    pub async fn handle(&self, event: DriftEvent) -> Result<FunctionResponse, anyhow::Error> {
        info!(
            "Slack notification for {} stacks and {} failed detections",
            event.stacks.len(),
            event.detection_failed_stacks.len()
        );

        match deliver(&event, &self.config.formatter, &self.sender).await {
            Ok(report) => {
                info!(
                    "Sent {} notifications, skipped {} stacks without changes",
                    report.sent, report.skipped
                );
                Ok(FunctionResponse::ok())
            }
            Err(e) => {
                error!("Unexpected error: {}", e);
                Err(e)
            }
        }
    }
}
