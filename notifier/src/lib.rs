mod delivery;
mod formatter;
mod handler;

pub use delivery::{deliver, DeliveryReport, SlackWebhook, WebhookSender};
pub use formatter::{format, format_failure};
pub use handler::Notifier;
