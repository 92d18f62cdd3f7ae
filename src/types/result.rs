use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful summarization body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Success {
    pub summary: String,
}

/// Failure body. `error` carries internal error text, `details` the raw provider payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Failure {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
            details: None,
        }
    }
}

/// The JSON body of every endpoint response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummarizeResult {
    Success(Success),
    Failure(Failure),
}

impl SummarizeResult {
    pub fn summary(&self) -> Option<&str> {
        match self {
            SummarizeResult::Success(success) => Some(&success.summary),
            SummarizeResult::Failure(_) => None,
        }
    }
}

/// Status code plus body, before any hosting envelope is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: SummarizeResult,
}

impl Reply {
    pub fn success(summary: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: SummarizeResult::Success(Success {
                summary: summary.into(),
            }),
        }
    }

    pub fn failure(status: u16, failure: Failure) -> Self {
        Self {
            status,
            body: SummarizeResult::Failure(failure),
        }
    }

    pub fn to_json(&self) -> Value {
        // Both variants are plain structs of strings and JSON values.
        serde_json::to_value(&self.body).unwrap_or(Value::Null)
    }
}
