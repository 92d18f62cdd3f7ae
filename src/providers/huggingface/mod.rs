//! Hugging Face Inference API summarization provider.

pub mod client;
pub mod types;

pub use client::HuggingFaceProvider;
