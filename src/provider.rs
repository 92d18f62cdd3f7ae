use crate::Error;

/// A trait for external services that can summarize a piece of text.
/// Each implementation makes exactly one outbound call per `summarize`.
#[async_trait::async_trait]
pub trait SummaryProvider: Send + Sync + 'static {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Summarize `text`, returning the extracted summary.
    async fn summarize(&self, text: &str) -> Result<String, Error>;
}
