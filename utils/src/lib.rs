mod config;
mod logging;
mod stack_url;

pub use config::{
    parse_log_level, FormatterConfig, NotifierConfig, LOG_LEVEL, SHOW_IN_SYNC_LEGACY,
    SHOW_IN_SYNC_RESOURCES, SHOW_IN_SYNC_STACKS, SLACK_WEBHOOK,
};
pub use logging::setup_logging;
pub use stack_url::get_stack_url;
