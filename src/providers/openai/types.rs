use serde::{Deserialize, Serialize};

use crate::types::Message;

/// OpenAI Chat Completions request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// OpenAI Chat Completions response. Only the fields needed to extract the summary are read.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// The assistant message inside a choice. `content` is null for refusals and tool calls.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn first_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}
