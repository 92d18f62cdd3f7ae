use super::types::{first_summary, InferenceRequest};
use crate::provider::SummaryProvider;
use crate::providers::{http_client, read_payload};
use crate::Error;
use reqwest::Client;

/// Default Inference API root.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
/// Default summarization model.
pub const DEFAULT_MODEL_ID: &str = "bart-large-cnn";

const PROVIDER: &str = "HuggingFace";

/// Hugging Face summarization-model provider implementation.
pub struct HuggingFaceProvider {
    client: Client,
    api_token: String,
    base_url: String,
    model_id: String,
}

impl HuggingFaceProvider {
    /// Create a provider for the default model on the public Inference API.
    pub fn new(api_token: String) -> Result<Self, Error> {
        Self::new_with_base_url(
            api_token,
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_MODEL_ID.to_string(),
        )
    }

    /// Create a provider with custom base URL and model.
    pub fn new_with_base_url(
        api_token: String,
        base_url: String,
        model_id: String,
    ) -> Result<Self, Error> {
        Ok(Self {
            client: http_client()?,
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id,
        })
    }

    /// Model-specific inference URL.
    pub fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_id)
    }
}

#[async_trait::async_trait]
impl SummaryProvider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn summarize(&self, text: &str) -> Result<String, Error> {
        let response = self
            .client
            .post(self.model_url())
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", "application/json")
            .json(&InferenceRequest::new(text))
            .send()
            .await?;

        let (status, payload) = read_payload(response).await?;
        if !(200..300).contains(&status) {
            return Err(Error::provider(PROVIDER, Some(status), payload));
        }

        first_summary(&payload).ok_or_else(|| Error::provider(PROVIDER, Some(status), payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_url() {
        let provider = HuggingFaceProvider::new("hf_test".to_string()).unwrap();
        assert_eq!(
            provider.model_url(),
            "https://api-inference.huggingface.co/models/bart-large-cnn"
        );

        let provider = HuggingFaceProvider::new_with_base_url(
            "hf_test".to_string(),
            "http://127.0.0.1:9000/".to_string(),
            "facebook/bart-large-cnn".to_string(),
        )
        .unwrap();
        assert_eq!(
            provider.model_url(),
            "http://127.0.0.1:9000/models/facebook/bart-large-cnn"
        );
    }
}
