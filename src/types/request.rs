use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// The body a client sends to the summarization endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Extract the request from a parsed JSON body.
    ///
    /// A missing body, a non-object body, a non-string `text`, or text that is
    /// empty after trimming are all rejected. The accepted text is kept as sent.
    pub fn from_body(body: Option<&Value>) -> Result<Self, Error> {
        let text = body
            .and_then(|body| body.get("text"))
            .and_then(Value::as_str)
            .ok_or_else(|| Error::validation("request body has no text field"))?;

        if text.trim().is_empty() {
            return Err(Error::validation("text is empty"));
        }

        Ok(Self::new(text))
    }
}

/// A hosting-neutral view of an inbound HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundRequest {
    pub method: String,
    /// The body parsed as JSON, or `None` when absent or unparseable.
    pub body: Option<Value>,
}

impl InboundRequest {
    pub fn new(method: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }

    /// A POST carrying `{ "text": text }`.
    pub fn post_text(text: impl Into<String>) -> Self {
        Self::new("POST", Some(serde_json::json!({ "text": text.into() })))
    }

    /// Build from a raw body. Bodies that are empty or not JSON become `None`.
    pub fn from_raw(method: impl Into<String>, raw: &[u8]) -> Self {
        let body = if raw.is_empty() {
            None
        } else {
            match serde_json::from_slice(raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::debug!("ignoring unparseable request body: {e}");
                    None
                }
            }
        };
        Self::new(method, body)
    }

    pub fn is_post(&self) -> bool {
        self.method.eq_ignore_ascii_case("POST")
    }
}
