use serde::Serialize;
use serde_json::{Map, Value};

/// Inference request for a summarization model.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest {
    pub inputs: String,
    /// Generation parameters. Always sent, always empty.
    pub parameters: Map<String, Value>,
}

impl InferenceRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: Map::new(),
        }
    }
}

/// Extract `[0].summary_text` from a summarization response.
/// Only the first element is read. Empty summaries count as missing.
pub fn first_summary(payload: &Value) -> Option<String> {
    payload
        .as_array()?
        .first()?
        .get("summary_text")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let value = serde_json::to_value(InferenceRequest::new("some text")).unwrap();
        assert_eq!(value, json!({ "inputs": "some text", "parameters": {} }));
    }

    #[test]
    fn test_first_summary() {
        let payload = json!([{ "summary_text": "A fox runs." }, { "summary_text": "no" }]);
        assert_eq!(first_summary(&payload).as_deref(), Some("A fox runs."));
    }

    #[test]
    fn test_first_summary_ignores_later_elements() {
        let payload = json!([{ "summary_text": "A fox runs." }, { "summary_text": 42 }]);
        assert_eq!(first_summary(&payload).as_deref(), Some("A fox runs."));

        let payload = json!([{ "summary_text": "A fox runs." }, "unexpected", null]);
        assert_eq!(first_summary(&payload).as_deref(), Some("A fox runs."));
    }

    #[test]
    fn test_first_summary_missing() {
        assert_eq!(first_summary(&json!([])), None);
        assert_eq!(first_summary(&json!([{}])), None);
        assert_eq!(first_summary(&json!([{ "summary_text": "" }])), None);
        assert_eq!(first_summary(&json!([{ "summary_text": 42 }])), None);
        assert_eq!(first_summary(&json!({ "0": { "summary_text": "x" } })), None);
        assert_eq!(first_summary(&json!({ "error": "Model is loading" })), None);
        assert_eq!(first_summary(&json!("gateway timeout")), None);
    }
}
