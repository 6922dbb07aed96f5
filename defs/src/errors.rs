use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Missing required environment variable: {0}")]
    MissingConfiguration(String),

    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidConfiguration(String, String),

    #[error("Failed to send message to webhook: {0}")]
    WebhookTransport(String),

    #[error("Webhook rejected message with status {status}: {body}")]
    WebhookRejected { status: u16, body: String },
}
