use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::provider::SummaryProvider;
use crate::providers::{http_client, read_payload};
use crate::{Error, Prompt};
use reqwest::Client;

/// Default OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Model used for every summarization.
pub const MODEL: &str = "gpt-3.5-turbo";
/// Output length bound for a summary.
pub const MAX_TOKENS: u32 = 150;
/// Sampling temperature for a summary.
pub const TEMPERATURE: f64 = 0.7;

const PROVIDER: &str = "OpenAI";

/// OpenAI provider implementation.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        Ok(Self {
            client: http_client()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the chat completion request for `text`.
    fn convert_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: MODEL.to_string(),
            messages: Prompt::summarize(text).into_messages(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait::async_trait]
impl SummaryProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn summarize(&self, text: &str) -> Result<String, Error> {
        let request = self.convert_request(text);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let (status, payload) = read_payload(response).await?;
        if !(200..300).contains(&status) {
            return Err(Error::provider(PROVIDER, Some(status), payload));
        }

        let content = serde_json::from_value::<ChatCompletionResponse>(payload.clone())
            .ok()
            .and_then(ChatCompletionResponse::first_content);

        content.ok_or_else(|| Error::provider(PROVIDER, Some(status), payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_creation() {
        let provider = OpenAIProvider::new("test-key".to_string());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_request_conversion() {
        let provider = OpenAIProvider::new("test-key".to_string()).unwrap();
        let request = provider.convert_request("Hello");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {
                        "role": "system",
                        "content": "You are a helpful assistant that summarizes text concisely and accurately."
                    },
                    {
                        "role": "user",
                        "content": "以下のテキストを要約してください。\n\nHello"
                    }
                ],
                "max_tokens": 150,
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let provider =
            OpenAIProvider::new_with_base_url("k".to_string(), "http://localhost:1/v1/".to_string())
                .unwrap();
        assert_eq!(provider.base_url, "http://localhost:1/v1");
    }

    #[test]
    fn test_first_content() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "A fox runs." } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        }))
        .unwrap();
        assert_eq!(response.first_content().as_deref(), Some("A fox runs."));

        let empty: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_content(), None);
    }
}
