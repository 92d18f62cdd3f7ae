//! The hosting-neutral summarization handler.

use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::{
    Error, InboundRequest, MakeProvider, ProviderConfig, ProviderFactory, Reply, SummarizeRequest,
};

/// Validates a request, calls the configured provider once, and shapes the reply.
///
/// Checks run in a fixed order: method, credential, text, provider. A failing
/// check never reaches the ones after it, so the provider is only built and
/// called for a POST with a credential and non-blank text.
#[derive(Debug, Clone)]
pub struct Summarizer<F = ProviderFactory> {
    config: ProviderConfig,
    factory: F,
}

impl Summarizer<ProviderFactory> {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_factory(config, ProviderFactory)
    }

    /// Build from environment variables, as a serverless invocation does on every request.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(ProviderConfig::from_env()?))
    }
}

impl<F: MakeProvider> Summarizer<F> {
    pub fn with_factory(config: ProviderConfig, factory: F) -> Self {
        Self { config, factory }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Handle one request. Every failure is converted into a reply.
    pub async fn handle(&self, request: InboundRequest) -> Reply {
        let span = info_span!(
            "summarize",
            request_id = %Uuid::new_v4(),
            method = %request.method,
        );

        async move {
            match self.summarize(&request).await {
                Ok(summary) => Reply::success(summary),
                Err(e) => {
                    match &e {
                        Error::MethodNotAllowed(_) | Error::Validation(_) => {
                            info!(status = e.status(), "rejected request: {e}")
                        }
                        Error::Provider { details, .. } => {
                            error!(status = e.status(), %details, "provider error or unexpected response: {e}")
                        }
                        _ => error!(status = e.status(), "summarization failed: {e}"),
                    }
                    e.into_reply()
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn summarize(&self, request: &InboundRequest) -> Result<String, Error> {
        if !request.is_post() {
            return Err(Error::MethodNotAllowed(request.method.clone()));
        }

        let credential = self.config.credential()?;
        let input = SummarizeRequest::from_body(request.body.as_ref())?;

        info!(chars = input.text.chars().count(), "Received text for summarization");
        debug!(text = %input.text);

        let provider = self.factory.make(&self.config, credential)?;
        let summary = provider.summarize(&input.text).await?;

        info!(provider = provider.name(), "Summarization successful");
        debug!(%summary);
        Ok(summary)
    }
}
