//! Serverless function envelope with a pre-parsed JSON body.
//!
//! The platform hands over `{ "method", "body" }` and expects `{ "status", "body" }` back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{InboundRequest, MakeProvider, Reply, SummarizeResult, Summarizer};

use super::config_failure;

/// Inbound function request.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionRequest {
    pub method: String,
    /// Parsed body. Platforms pass non-JSON content types through as a string.
    #[serde(default)]
    pub body: Option<Value>,
}

/// Outbound function response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionResponse {
    pub status: u16,
    pub body: SummarizeResult,
}

impl From<Reply> for FunctionResponse {
    fn from(reply: Reply) -> Self {
        Self {
            status: reply.status,
            body: reply.body,
        }
    }
}

impl From<FunctionRequest> for InboundRequest {
    fn from(request: FunctionRequest) -> Self {
        match request.body {
            Some(Value::String(raw)) => InboundRequest::from_raw(request.method, raw.as_bytes()),
            body => InboundRequest::new(request.method, body),
        }
    }
}

/// Handle one invocation with an already-built summarizer.
pub async fn handle<F: MakeProvider>(
    summarizer: &Summarizer<F>,
    request: FunctionRequest,
) -> FunctionResponse {
    summarizer.handle(request.into()).await.into()
}

/// Handle one invocation, reading configuration from the environment first.
pub async fn handle_from_env(request: FunctionRequest) -> FunctionResponse {
    match Summarizer::from_env() {
        Ok(summarizer) => handle(&summarizer, request).await,
        Err(e) => config_failure(e).into(),
    }
}
