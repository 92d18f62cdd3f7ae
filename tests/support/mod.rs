#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use summarize_relay::hosting::server;
use summarize_relay::{ProviderConfig, Summarizer};
use tokio::net::TcpListener;

/// Start the router on an ephemeral port and return its root URL.
pub async fn spawn_app(config: ProviderConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let app = server::router(Arc::new(Summarizer::new(config)));
    tokio::spawn(async move {
        server::serve(listener, app)
            .await
            .expect("Test server failed");
    });
    format!("http://{addr}")
}

/// OpenAI configuration pointed at a mock server.
pub fn openai_config(base_url: &str) -> ProviderConfig {
    ProviderConfig::openai(Some("sk-test".to_string())).with_base_url(base_url)
}

/// Hugging Face configuration pointed at a mock server.
pub fn huggingface_config(base_url: &str) -> ProviderConfig {
    ProviderConfig::huggingface(Some("hf_test".to_string()))
        .with_base_url(base_url)
        .with_model_id("facebook/bart-large-cnn")
}

/// A chat completion whose first choice says `content`.
pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25 }
    })
}

/// The exact chat completion body sent for `text`.
pub fn chat_request(text: &str) -> Value {
    json!({
        "model": "gpt-3.5-turbo",
        "messages": [
            {
                "role": "system",
                "content": "You are a helpful assistant that summarizes text concisely and accurately."
            },
            {
                "role": "user",
                "content": format!("以下のテキストを要約してください。\n\n{text}")
            }
        ],
        "max_tokens": 150,
        "temperature": 0.7
    })
}
