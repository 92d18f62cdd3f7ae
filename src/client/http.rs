use reqwest::Client;

use super::ClientError;
use crate::providers::REQUEST_TIMEOUT;
use crate::{Failure, SummarizeRequest, Success};

/// HTTP client for the summarization endpoint.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: Client,
    url: String,
}

impl SummaryClient {
    /// Client for the server rooted at `base_url`; requests go to `{base_url}/summarize`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let url = format!("{}/summarize", base_url.as_ref().trim_end_matches('/'));
        Self::with_url(url)
    }

    /// Client for an explicit endpoint URL.
    pub fn with_url(url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one request and return the summary.
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<String, ClientError> {
        let response = self.http.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Failure>()
                .await
                .ok()
                .map(|failure| failure.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(ClientError::Endpoint(message));
        }

        let success: Success = response.json().await?;
        Ok(success.summary)
    }
}
