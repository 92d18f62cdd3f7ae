//! Event-style serverless envelope where the body travels as a raw JSON string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{MakeProvider, Reply, Summarizer};

use super::config_failure;

/// Inbound event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaEvent {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

/// Outbound event response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl From<Reply> for LambdaResponse {
    fn from(reply: Reply) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        Self {
            status_code: reply.status,
            headers,
            body: reply.to_json().to_string(),
        }
    }
}

/// Handle one event with an already-built summarizer.
pub async fn handle<F: MakeProvider>(
    summarizer: &Summarizer<F>,
    event: LambdaEvent,
) -> LambdaResponse {
    let body = event.body.unwrap_or_default();
    let request = crate::InboundRequest::from_raw(event.http_method, body.as_bytes());
    summarizer.handle(request).await.into()
}

/// Handle one event, reading configuration from the environment first.
pub async fn handle_from_env(event: LambdaEvent) -> LambdaResponse {
    match Summarizer::from_env() {
        Ok(summarizer) => handle(&summarizer, event).await,
        Err(e) => config_failure(e).into(),
    }
}
