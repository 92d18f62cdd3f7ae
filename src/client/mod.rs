//! Client side of the endpoint: an HTTP client and the form state machine that drives it.

pub mod form;
pub mod http;

pub use form::{FormState, SubmitRejected, SummaryForm};
pub use http::SummaryClient;

use thiserror::Error;

/// Errors a client sees when a summarization request does not succeed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint answered with an error status. Holds its `message`, or a
    /// generic status line when the body had none.
    #[error("{0}")]
    Endpoint(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}
