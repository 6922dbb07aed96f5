use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use drift_utils::{NotifierConfig, SLACK_WEBHOOK};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use url::Url;

const WEBHOOK_PATH: &str = "/services/T000/B000/XXXX";

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

/// Local stand-in for a Slack incoming webhook. Replies 500 to the request
/// with index `fail_on`, 200 to every other one.
#[derive(Clone, Default)]
pub struct MockWebhook {
    pub received: Arc<Mutex<Vec<ReceivedRequest>>>,
    fail_on: Option<usize>,
}

impl MockWebhook {
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn receive(
    State(webhook): State<MockWebhook>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    let mut received = webhook.received.lock().unwrap();
    let index = received.len();
    received.push(ReceivedRequest {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
        body,
    });

    if webhook.fail_on == Some(index) {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

pub async fn start_mock_webhook(fail_on: Option<usize>) -> (MockWebhook, Url) {
    let webhook = MockWebhook {
        fail_on,
        ..Default::default()
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock webhook");
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route(WEBHOOK_PATH, post(receive))
        .with_state(webhook.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = Url::parse(&format!("http://{}{}", addr, WEBHOOK_PATH)).unwrap();
    (webhook, url)
}

/// Loads the configuration the same way the Lambda does, from environment
/// style key/value pairs.
pub fn notifier_config(url: &Url, switches: &[(&str, &str)]) -> NotifierConfig {
    let mut vars: Vec<(String, String)> = vec![(SLACK_WEBHOOK.to_string(), url.to_string())];
    vars.extend(switches.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    NotifierConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .expect("Invalid test configuration")
}
