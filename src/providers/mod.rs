//! Provider implementations for different inference services.

pub mod huggingface;
pub mod openai;

// Re-export commonly used provider types
pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAIProvider;

use serde_json::Value;
use std::time::Duration;

use crate::Error;

/// Timeout applied to every outbound provider call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub(crate) fn http_client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

/// Read a provider response into its status and payload.
/// Bodies that are not JSON are kept as a JSON string so they can still be surfaced as details.
pub(crate) async fn read_payload(response: reqwest::Response) -> Result<(u16, Value), Error> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    let payload = serde_json::from_str(&text).unwrap_or(Value::String(text));
    Ok((status, payload))
}
