use std::env;

use drift_defs::NotifierError;
use log::LevelFilter;
use url::Url;

pub const SLACK_WEBHOOK: &str = "SLACK_WEBHOOK";
pub const SHOW_IN_SYNC_RESOURCES: &str = "SHOW_IN_SYNC_RESOURCES";
pub const SHOW_IN_SYNC_STACKS: &str = "SHOW_IN_SYNC_STACKS";
/// Older name of `SHOW_IN_SYNC_RESOURCES`, still read when the new one is unset
pub const SHOW_IN_SYNC_LEGACY: &str = "SHOW_IN_SYNC";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Display switches for the message formatter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatterConfig {
    pub show_in_sync_resources: bool,
    pub show_in_sync_stacks: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotifierConfig {
    pub webhook_url: Url,
    pub formatter: FormatterConfig,
    pub log_level: LevelFilter,
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook = lookup(SLACK_WEBHOOK)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| NotifierError::MissingConfiguration(SLACK_WEBHOOK.to_string()))?;

        let webhook_url = Url::parse(webhook.trim()).map_err(|e| {
            NotifierError::InvalidConfiguration(SLACK_WEBHOOK.to_string(), e.to_string())
        })?;

        let show_in_sync_resources = lookup(SHOW_IN_SYNC_RESOURCES)
            .or_else(|| lookup(SHOW_IN_SYNC_LEGACY))
            .map(|value| is_enabled(&value))
            .unwrap_or(false);
        let show_in_sync_stacks = lookup(SHOW_IN_SYNC_STACKS)
            .map(|value| is_enabled(&value))
            .unwrap_or(false);

        Ok(NotifierConfig {
            webhook_url,
            formatter: FormatterConfig {
                show_in_sync_resources,
                show_in_sync_stacks,
            },
            log_level: parse_log_level(lookup(LOG_LEVEL).as_deref()),
        })
    }
}

// Only the exact string "true" turns a switch on
fn is_enabled(value: &str) -> bool {
    value == "true"
}

pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}
