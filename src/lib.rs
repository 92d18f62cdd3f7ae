//! A text summarization endpoint that relays to one external inference provider.
//!
//! A request `{ "text": ... }` is validated, forwarded to either OpenAI Chat
//! Completions or a Hugging Face summarization model, and answered with
//! `{ "summary": ... }` or a `{ "message", ... }` failure body. The same
//! [`Summarizer`] backs the long-running server and the serverless envelopes in
//! [`hosting`]; [`client`] holds the form logic that talks to it.

pub mod client;
pub mod config;
pub mod error;
pub mod factory;
pub mod hosting;
pub mod provider;
pub mod providers;
pub mod summarize;
pub mod types;

// Re-export core types for easy usage
pub use config::Config;
pub use error::Error;
pub use factory::{MakeProvider, ProviderConfig, ProviderFactory, ProviderType};
pub use provider::SummaryProvider;
pub use providers::*;
pub use summarize::Summarizer;
pub use types::*;
