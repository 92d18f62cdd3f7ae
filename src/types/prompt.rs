use super::message::Message;

/// System instruction sent with every chat-completion summarization.
pub const SUMMARIZE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes text concisely and accurately.";

/// Instruction placed in front of the user's text. Sent verbatim.
pub const SUMMARIZE_USER_INSTRUCTION: &str = "以下のテキストを要約してください。";

/// A structured prompt containing a sequence of messages.
#[derive(Debug, Clone)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    /// Create a prompt with a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(content)],
        }
    }

    /// The fixed two-message conversation used to summarize `text`.
    pub fn summarize(text: &str) -> Self {
        Self::system(SUMMARIZE_SYSTEM_PROMPT)
            .with_user(format!("{SUMMARIZE_USER_INSTRUCTION}\n\n{text}"))
    }

    /// Add a user message.
    pub fn with_user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Take the messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
