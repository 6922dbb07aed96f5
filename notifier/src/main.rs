use std::sync::Arc;

use drift_defs::FunctionResponse;
use drift_notifier::{Notifier, SlackWebhook};
use drift_utils::{setup_logging, NotifierConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{error, info};
use serde_json::Value;

async fn func(
    event: LambdaEvent<Value>,
    notifier: &Notifier<SlackWebhook>,
) -> Result<FunctionResponse, Error> {
    let (event, context) = event.into_parts();
    info!("Slack notification lambda, request {}", context.request_id);

    notifier
        .handle_payload(event)
        .await
        .map_err(|e| Error::from(e.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = match NotifierConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not set up yet without a config, report on stderr directly
            eprintln!("Unexpected error: {}", e);
            return Err(e.into());
        }
    };
    setup_logging(config.log_level)?;

    let notifier = Arc::new(Notifier::from_config(config));
    info!(
        "Starting drift notifier (in sync resources: {}, in sync stacks: {})",
        notifier.config().formatter.show_in_sync_resources,
        notifier.config().formatter.show_in_sync_stacks
    );

    let fun = service_fn(move |event: LambdaEvent<Value>| {
        let notifier = notifier.clone();
        async move { func(event, &notifier).await }
    });

    if let Err(e) = lambda_runtime::run(fun).await {
        error!("Lambda runtime stopped: {}", e);
        return Err(e);
    }

    Ok(())
}
