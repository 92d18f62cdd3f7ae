//! Adapters between hosting envelopes and [`Summarizer`](crate::Summarizer).
//!
//! Each adapter only translates its platform's request and response shapes;
//! all behavior lives in the summarizer.

pub mod lambda;
pub mod server;
pub mod serverless;

use crate::{Error, Reply};

/// Reply used when the environment itself cannot be turned into a configuration.
pub(crate) fn config_failure(e: Error) -> Reply {
    tracing::error!("invalid configuration: {e}");
    e.into_reply()
}

#[cfg(test)]
mod tests {
    use super::{lambda, serverless};
    use crate::error::{INVALID_CONFIG_MESSAGE, MISSING_CREDENTIAL_MESSAGE};
    use serde_json::{json, Value};

    // The only test in the crate that touches PROVIDER_TYPE; both adapters share it.
    #[tokio::test]
    async fn test_invalid_provider_type_from_env() {
        std::env::set_var("PROVIDER_TYPE", "bogus");

        let request: serverless::FunctionRequest =
            serde_json::from_value(json!({ "method": "POST", "body": { "text": "hi" } })).unwrap();
        let response = serverless::handle_from_env(request).await;
        let body = serde_json::to_value(&response.body).unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(body["message"], INVALID_CONFIG_MESSAGE);
        assert_ne!(body["message"], MISSING_CREDENTIAL_MESSAGE);
        assert!(body["error"].as_str().unwrap().contains("Invalid PROVIDER_TYPE 'bogus'"));

        let event = lambda::LambdaEvent {
            http_method: "POST".to_string(),
            body: Some("{\"text\":\"hi\"}".to_string()),
        };
        let response = lambda::handle_from_env(event).await;
        let body: Value = serde_json::from_str(&response.body).unwrap();

        assert_eq!(response.status_code, 500);
        assert_eq!(body["message"], INVALID_CONFIG_MESSAGE);
        assert!(body["error"].as_str().unwrap().contains("Invalid PROVIDER_TYPE 'bogus'"));

        std::env::remove_var("PROVIDER_TYPE");
    }
}
