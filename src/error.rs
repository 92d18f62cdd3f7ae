use serde_json::Value;
use thiserror::Error;

use crate::types::{Failure, Reply};

/// Message returned for any method other than POST.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method Not Allowed";
/// Message returned when the provider credential is not configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "サーバー設定エラー: APIトークンが設定されていません。";
/// Message returned when the configuration itself is invalid.
pub const INVALID_CONFIG_MESSAGE: &str = "サーバー設定エラー: 設定が正しくありません。";
/// Message returned when the request carries no usable text.
pub const NO_TEXT_MESSAGE: &str = "要約するテキストがありません。";
/// Message returned when the provider answered with an error or an unexpected shape.
pub const PROVIDER_FAILURE_MESSAGE: &str = "要約APIからの応答に問題がありました。";
/// Message returned for every other failure.
pub const INTERNAL_FAILURE_MESSAGE: &str =
    "サーバー側でエラーが発生しました。要約できませんでした。";

/// Errors that can occur while handling a summarization request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Provider error: {provider} returned status {status:?}")]
    Provider {
        provider: &'static str,
        status: Option<u16>,
        details: Value,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// A provider failure. `status` is the provider's HTTP status, if it answered at all.
    pub fn provider(provider: &'static str, status: Option<u16>, details: Value) -> Self {
        Error::Provider {
            provider,
            status,
            details,
        }
    }

    /// The HTTP status this error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            Error::MethodNotAllowed(_) => 405,
            Error::Validation(_) => 400,
            Error::Provider {
                status: Some(status),
                ..
            } if !(200..300).contains(status) => *status,
            Error::Config(_)
            | Error::MissingCredential(_)
            | Error::Provider { .. }
            | Error::Http(_) => 500,
        }
    }

    /// The JSON body sent back to the caller.
    pub fn to_failure(&self) -> Failure {
        match self {
            Error::MethodNotAllowed(_) => Failure::message(METHOD_NOT_ALLOWED_MESSAGE),
            Error::Config(_) => Failure {
                message: INVALID_CONFIG_MESSAGE.to_string(),
                error: Some(self.to_string()),
                details: None,
            },
            Error::MissingCredential(_) => Failure::message(MISSING_CREDENTIAL_MESSAGE),
            Error::Validation(_) => Failure::message(NO_TEXT_MESSAGE),
            Error::Provider { details, .. } => Failure {
                message: PROVIDER_FAILURE_MESSAGE.to_string(),
                error: None,
                details: Some(details.clone()),
            },
            Error::Http(_) => Failure {
                message: INTERNAL_FAILURE_MESSAGE.to_string(),
                error: Some(self.to_string()),
                details: None,
            },
        }
    }

    pub fn into_reply(self) -> Reply {
        Reply::failure(self.status(), self.to_failure())
    }
}
